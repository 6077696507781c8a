use crate::error::WriteError;
use crate::to_json::ToJson;
use crate::value::{JsonValue, Number};
use std::fmt;
use std::io;

/// Writes a value as compact JSON text. No whitespace is ever inserted.
pub fn write(value: &JsonValue) -> Result<String, WriteError> {
    let mut out = String::new();
    write_to(value, &mut out)?;
    Ok(out)
}

/// Best-effort variant of [`write`]: `None` instead of an error.
pub fn write_opt(value: &JsonValue) -> Option<String> {
    write(value).ok()
}

/// Writes any self-serializing value: converts it once through
/// [`ToJson`], then writes the produced value.
pub fn write_json<T: ToJson + ?Sized>(value: &T) -> Result<String, WriteError> {
    write(&value.to_json())
}

/// Writes compact JSON into an in-memory sink.
pub fn write_to<W: fmt::Write>(value: &JsonValue, out: &mut W) -> Result<(), WriteError> {
    match value {
        JsonValue::Null => out.write_str("null")?,
        JsonValue::Bool(true) => out.write_str("true")?,
        JsonValue::Bool(false) => out.write_str("false")?,
        JsonValue::Number(Number::Int(n)) => write!(out, "{n}")?,
        JsonValue::Number(Number::Float(f)) => write_float(*f, out)?,
        JsonValue::String(s) => write_string(s, out)?,
        JsonValue::Array(items) => {
            out.write_char('[')?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.write_char(',')?;
                }
                write_to(item, out)?;
            }
            out.write_char(']')?;
        }
        JsonValue::Object(map) => {
            out.write_char('{')?;
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.write_char(',')?;
                }
                write_string(key, out)?;
                out.write_char(':')?;
                write_to(item, out)?;
            }
            out.write_char('}')?;
        }
    }
    Ok(())
}

/// Writes compact JSON into a byte stream.
pub fn write_io<W: io::Write>(value: &JsonValue, out: &mut W) -> Result<(), WriteError> {
    let text = write(value)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn write_float<W: fmt::Write>(f: f64, out: &mut W) -> Result<(), WriteError> {
    if !f.is_finite() {
        return Err(WriteError::NonFinite(f));
    }
    // `{:?}` is the shortest form that reparses to the same f64, and keeps
    // the `.0` on integral values.
    write!(out, "{f:?}")?;
    Ok(())
}

fn write_string<W: fmt::Write>(s: &str, out: &mut W) -> Result<(), WriteError> {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '"' => out.write_str("\\\"")?,
            c if (c as u32) < 32 => write!(out, "\\u{:04X}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')?;
    Ok(())
}
