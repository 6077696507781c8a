use std::io::Read;
use std::str::CharIndices;

use nom::{
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, one_of},
    combinator::opt,
    sequence::{preceded, tuple},
    IResult, Offset, Slice,
};

use crate::{
    error::{Error, Kind, Position},
    input::Input,
    value::{JsonValue, Number},
};

type PResult<'a, T> = IResult<Input<'a>, T, Error>;

/// Controls how the parser turns collected elements into container values.
///
/// The parsing algorithm itself never changes: it hands every object's
/// key/value pairs and every array's items over in document order, and the
/// materializer decides what to build. The default [`Standard`] keeps
/// duplicate keys (appending into an [`OrderedMap`](crate::OrderedMap)); a
/// caller-supplied implementation can enforce uniqueness, dedupe, or reorder
/// instead, failing the parse with the returned [`Kind`].
pub trait Materialize {
    fn object(&self, entries: Vec<(String, JsonValue)>) -> Result<JsonValue, Kind>;

    fn array(&self, items: Vec<JsonValue>) -> Result<JsonValue, Kind>;
}

/// Default materialization: insertion-ordered objects that keep duplicate
/// keys, plain vectors for arrays.
pub struct Standard;

impl Materialize for Standard {
    fn object(&self, entries: Vec<(String, JsonValue)>) -> Result<JsonValue, Kind> {
        Ok(JsonValue::Object(entries.into_iter().collect()))
    }

    fn array(&self, items: Vec<JsonValue>) -> Result<JsonValue, Kind> {
        Ok(JsonValue::Array(items))
    }
}

/// Parses a complete JSON document into a [`JsonValue`].
///
/// Strict: any lexical or structural violation surfaces as an
/// [`Error`] carrying the position of the rejected character. Trailing
/// non-whitespace input after the root value is also rejected.
pub fn parse(input: &str) -> Result<JsonValue, Error> {
    parse_with(input, &Standard)
}

/// Best-effort variant of [`parse`]: `None` instead of an error.
pub fn parse_opt(input: &str) -> Option<JsonValue> {
    parse(input).ok()
}

/// Parses with caller-controlled container materialization.
pub fn parse_with<M: Materialize>(input: &str, materializer: &M) -> Result<JsonValue, Error> {
    let i = Input::new(input);
    let (i, value) = json_value(i, materializer).map_err(flatten)?;
    let (i, _) = sp(i).map_err(flatten)?;
    if !i.is_empty() {
        let snippet: String = i.fragment().chars().take(12).collect();
        return Err(Error::new(i.position(), Kind::CharsAfterRoot(snippet)));
    }
    Ok(value)
}

/// Reads the whole source (UTF-8) into memory, then parses it.
pub fn from_reader<R: Read>(mut reader: R) -> Result<JsonValue, Error> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::new(Position::default(), Kind::Io(e.kind())))?;
    parse(&text)
}

fn flatten(err: nom::Err<Error>) -> Error {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => Error::new(Position::default(), Kind::UnexpectedEof),
    }
}

fn failure_at(i: Input, kind: Kind) -> nom::Err<Error> {
    nom::Err::Failure(Error::new(i.position(), kind))
}

fn fail<T>(i: Input, kind: Kind) -> PResult<T> {
    Err(failure_at(i, kind))
}

fn sp(i: Input) -> PResult<Input> {
    take_while(char::is_whitespace)(i)
}

/// Consumes `expected` if it is next.
fn maybe(i: Input, expected: char) -> (Input, bool) {
    match i.peek() {
        Some(c) if c == expected => (i.slice(expected.len_utf8()..), true),
        _ => (i, false),
    }
}

fn expect(i: Input, expected: char, kind: Kind) -> PResult<()> {
    let (rest, found) = maybe(i, expected);
    if found {
        Ok((rest, ()))
    } else {
        fail(i, kind)
    }
}

/// Reads any JSON value, dispatching on one character of lookahead.
fn json_value<'a, M: Materialize>(i: Input<'a>, m: &M) -> PResult<'a, JsonValue> {
    let (i, _) = sp(i)?;
    match i.peek() {
        None => fail(i, Kind::UnexpectedEof),
        Some('"') => {
            let (i, s) = string(i)?;
            Ok((i, JsonValue::String(s)))
        }
        Some('[') => array(i, m),
        Some('{') => object(i, m),
        Some(c) if c == '-' || c.is_ascii_digit() => {
            let (i, n) = number(i)?;
            Ok((i, JsonValue::Number(n)))
        }
        Some('t') | Some('f') => boolean(i),
        Some('n') => null(i),
        Some(c) => fail(i, Kind::UnexpectedChar(c)),
    }
}

fn boolean(i: Input) -> PResult<JsonValue> {
    if let Ok((rest, _)) = tag::<_, _, Error>("true")(i) {
        return Ok((rest, JsonValue::Bool(true)));
    }
    if let Ok((rest, _)) = tag::<_, _, Error>("false")(i) {
        return Ok((rest, JsonValue::Bool(false)));
    }
    fail(i, Kind::NotABool)
}

fn null(i: Input) -> PResult<JsonValue> {
    match tag::<_, _, Error>("null")(i) {
        Ok((rest, _)) => Ok((rest, JsonValue::Null)),
        Err(_) => fail(i, Kind::NotANull),
    }
}

/// Reads a number. The literal is an integer when it has no `.`, `e`, or
/// `E` and its value fits the 32-bit signed range; everything else is a
/// float with IEEE-754 conversion semantics (oversized magnitudes saturate).
fn number<'a>(i: Input<'a>) -> PResult<'a, Number> {
    let start = i;
    let (i, _) = opt(one_of("-+"))(i)?;
    let (i, _) = digit1(i).map_err(|_: nom::Err<Error>| failure_at(i, Kind::NotANumber))?;
    let (i, frac) = opt(preceded(char('.'), digit1))(i)?;
    let (i, exp) = opt(tuple((one_of("eE"), opt(one_of("-+")), digit1)))(i)?;

    let lexeme = &start.fragment()[..start.offset(&i)];

    if frac.is_none() && exp.is_none() {
        if let Ok(n) = lexeme.parse::<i64>() {
            if (i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&n) {
                return Ok((i, Number::Int(n)));
            }
        }
    }

    match lexeme.parse::<f64>() {
        Ok(f) => Ok((i, Number::Float(f))),
        Err(_) => fail(start, Kind::NotANumber),
    }
}

/// Reads a string literal, processing escapes.
fn string<'a>(i: Input<'a>) -> PResult<'a, String> {
    let (i, _) = expect(i, '"', Kind::MissingQuote)?;
    let data = i.fragment();
    let mut out = String::new();
    let mut chars = data.char_indices();

    loop {
        let Some((idx, c)) = chars.next() else {
            return fail(i.slice(data.len()..), Kind::UnterminatedString);
        };
        match c {
            '"' => return Ok((i.slice(idx + 1..), out)),
            '\\' => {
                let Some((eidx, escape)) = chars.next() else {
                    return fail(i.slice(data.len()..), Kind::UnterminatedString);
                };
                match escape {
                    '"' | '\\' | '/' => out.push(escape),
                    'b' => out.push('\u{0008}'),
                    'f' => out.push('\u{000C}'),
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    'u' => out.push(unicode_escape(i, data, &mut chars)?),
                    _ => return fail(i.slice(eidx..), Kind::UnknownEscape(escape)),
                }
            }
            _ => out.push(c),
        }
    }
}

/// Position of the next character `chars` has not yet yielded.
fn rest_of<'a>(i: Input<'a>, data: &'a str, chars: &CharIndices<'a>) -> Input<'a> {
    i.slice(data.len() - chars.as_str().len()..)
}

/// Decodes the `XXXX` of a `\uXXXX` escape. A high surrogate must be
/// followed by a low-surrogate escape; the pair combines into one scalar.
/// Unpaired surrogates are rejected, since a Rust string cannot hold them.
fn unicode_escape<'a>(
    i: Input<'a>,
    data: &'a str,
    chars: &mut CharIndices<'a>,
) -> Result<char, nom::Err<Error>> {
    let code = hex4(i, data, chars)?;
    let scalar = match code {
        0xD800..=0xDBFF => {
            let mut ahead = chars.clone();
            match (ahead.next(), ahead.next()) {
                (Some((_, '\\')), Some((_, 'u'))) => {}
                _ => return Err(failure_at(rest_of(i, data, chars), Kind::UnpairedSurrogate(code))),
            }
            *chars = ahead;
            let low = hex4(i, data, chars)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(failure_at(rest_of(i, data, chars), Kind::UnpairedSurrogate(code)));
            }
            0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00)
        }
        0xDC00..=0xDFFF => {
            return Err(failure_at(rest_of(i, data, chars), Kind::UnpairedSurrogate(code)))
        }
        _ => code,
    };
    Ok(char::from_u32(scalar).unwrap_or('\u{FFFD}'))
}

fn hex4<'a>(
    i: Input<'a>,
    data: &'a str,
    chars: &mut CharIndices<'a>,
) -> Result<u32, nom::Err<Error>> {
    let mut code = 0;
    for _ in 0..4 {
        match chars.next() {
            None => return Err(failure_at(i.slice(data.len()..), Kind::UnterminatedEscape)),
            Some((hidx, h)) => match h.to_digit(16) {
                Some(digit) => code = code * 16 + digit,
                None => return Err(failure_at(i.slice(hidx..), Kind::NotAnHex(h))),
            },
        }
    }
    Ok(code)
}

fn array<'a, M: Materialize>(i: Input<'a>, m: &M) -> PResult<'a, JsonValue> {
    let (i, _) = expect(i, '[', Kind::MissingArrayBracket)?;
    let (i, _) = sp(i)?;
    let (rest, empty) = maybe(i, ']');
    if empty {
        return materialize(m.array(Vec::new()), rest);
    }

    let mut items = Vec::new();
    let mut i = i;
    loop {
        let (rest, value) = json_value(i, m)?;
        items.push(value);
        let (rest, _) = sp(rest)?;
        let (rest, comma) = maybe(rest, ',');
        i = rest;
        if !comma {
            break;
        }
    }
    let (i, _) = expect(i, ']', Kind::MissingArrayBracket)?;
    materialize(m.array(items), i)
}

fn object<'a, M: Materialize>(i: Input<'a>, m: &M) -> PResult<'a, JsonValue> {
    let (i, _) = expect(i, '{', Kind::MissingObjectBracket)?;
    let (i, _) = sp(i)?;
    let (rest, empty) = maybe(i, '}');
    if empty {
        return materialize(m.object(Vec::new()), rest);
    }

    let mut entries = Vec::new();
    let mut i = i;
    loop {
        let (rest, _) = sp(i)?;
        let (rest, key) = string(rest)?;
        let (rest, _) = sp(rest)?;
        let (rest, _) = expect(rest, ':', Kind::MissingColon)?;
        let (rest, value) = json_value(rest, m)?;
        entries.push((key, value));
        let (rest, _) = sp(rest)?;
        let (rest, comma) = maybe(rest, ',');
        i = rest;
        if !comma {
            break;
        }
    }
    let (i, _) = expect(i, '}', Kind::MissingObjectBracket)?;
    materialize(m.object(entries), i)
}

fn materialize<'a>(built: Result<JsonValue, Kind>, i: Input<'a>) -> PResult<'a, JsonValue> {
    match built {
        Ok(value) => Ok((i, value)),
        Err(kind) => fail(i, kind),
    }
}
