use crate::map::OrderedMap;
use crate::value::{JsonValue, Number};
use std::collections::{BTreeMap, HashMap};

/// Conversion a domain type implements to take part in JSON serialization.
///
/// The protocol is a single explicit method, never reflection: a type builds
/// the [`JsonValue`] that represents it, and the writer takes it from there.
pub trait ToJson {
    fn to_json(&self) -> JsonValue;
}

impl ToJson for JsonValue {
    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

impl ToJson for bool {
    fn to_json(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

macro_rules! to_json_int {
    ($($t:ty)*) => {$(
        impl ToJson for $t {
            fn to_json(&self) -> JsonValue {
                JsonValue::Number(Number::Int(i64::from(*self)))
            }
        }
    )*};
}

to_json_int!(i8 i16 i32 i64 u8 u16 u32);

impl ToJson for f32 {
    fn to_json(&self) -> JsonValue {
        JsonValue::Number(Number::Float(f64::from(*self)))
    }
}

impl ToJson for f64 {
    fn to_json(&self) -> JsonValue {
        JsonValue::Number(Number::Float(*self))
    }
}

impl ToJson for str {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_owned())
    }
}

impl ToJson for String {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl ToJson for OrderedMap {
    fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.clone())
    }
}

/// Absence serializes as `null`.
impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> JsonValue {
        match self {
            Some(value) => value.to_json(),
            None => JsonValue::Null,
        }
    }
}

/// A sequence of self-serializing values becomes a JSON array in sequence
/// order.
impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> JsonValue {
        self.as_slice().to_json()
    }
}

/// A string-keyed map of self-serializing values becomes a JSON object with
/// keys in lexicographic order.
impl<T: ToJson> ToJson for BTreeMap<String, T> {
    fn to_json(&self) -> JsonValue {
        let mut map = OrderedMap::with_capacity(self.len());
        for (key, value) in self {
            map.push(key.clone(), value.to_json());
        }
        JsonValue::Object(map)
    }
}

/// Same as the `BTreeMap` adapter; the keys are sorted first, so the
/// lexicographic reordering is observable in the output.
impl<T: ToJson> ToJson for HashMap<String, T> {
    fn to_json(&self) -> JsonValue {
        let mut entries: Vec<(&String, &T)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut map = OrderedMap::with_capacity(self.len());
        for (key, value) in entries {
            map.push(key.clone(), value.to_json());
        }
        JsonValue::Object(map)
    }
}
