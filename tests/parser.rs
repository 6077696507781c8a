use ordered_json::error::Kind;
use ordered_json::{parse, parse_opt, parse_with, from_reader, JsonValue, Materialize, Number, OrderedMap};

fn object(entries: &[(&str, JsonValue)]) -> JsonValue {
    JsonValue::Object(
        entries
            .iter()
            .map(|(k, v)| (*k, v.clone()))
            .collect::<OrderedMap>(),
    )
}

#[test]
fn parse_basics() {
    let data = r#"
    {
        "hello": "world",
        "vec": [
            {
        "num1": 1,
        "num2": 1.2,
        "num3": 1.2e12,
        "num4": -12
    }
        ],
    "is": false,
    "is_not": true,
    "empty": null
    }
    "#;

    let value = parse(data).unwrap();

    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 5);
    assert_eq!(value.get("hello"), Some(&JsonValue::from("world")));
    assert_eq!(value.get("is"), Some(&JsonValue::Bool(false)));
    assert_eq!(value.get("is_not"), Some(&JsonValue::Bool(true)));
    assert_eq!(value.get("empty"), Some(&JsonValue::Null));

    let inner = &value.get("vec").unwrap().as_array().unwrap()[0];
    assert_eq!(inner.get("num1"), Some(&JsonValue::from(1)));
    assert_eq!(inner.get("num2"), Some(&JsonValue::from(1.2)));
    assert_eq!(inner.get("num3"), Some(&JsonValue::from(1.2e12)));
    assert_eq!(inner.get("num4"), Some(&JsonValue::from(-12)));
}

#[test]
fn parse_scalars() {
    assert_eq!(parse("null").unwrap(), JsonValue::Null);
    assert_eq!(parse("true").unwrap(), JsonValue::Bool(true));
    assert_eq!(parse("false").unwrap(), JsonValue::Bool(false));
    assert_eq!(parse("\"hi\"").unwrap(), JsonValue::from("hi"));
    assert_eq!(parse("  42  ").unwrap(), JsonValue::from(42));
}

#[test]
fn integer_or_float_follows_the_literal() {
    // No dot or exponent, fits in 32 bits: integer.
    assert_eq!(parse("42").unwrap(), JsonValue::Number(Number::Int(42)));
    assert_eq!(parse("-2147483648").unwrap(), JsonValue::Number(Number::Int(-2147483648)));

    // Everything else is a float, even when numerically integral.
    assert_eq!(parse("42.0").unwrap(), JsonValue::Number(Number::Float(42.0)));
    assert_eq!(parse("4e2").unwrap(), JsonValue::Number(Number::Float(400.0)));
    assert_eq!(parse("3000000000").unwrap(), JsonValue::Number(Number::Float(3_000_000_000.0)));
    assert_eq!(parse("1.5e3").unwrap(), JsonValue::Number(Number::Float(1500.0)));
    assert_eq!(parse("2E-2").unwrap(), JsonValue::Number(Number::Float(2e-2)));

    assert_ne!(parse("42").unwrap(), parse("42.0").unwrap());
}

#[test]
fn oversized_literals_saturate() {
    // Way past f64 range: IEEE conversion saturates, surfaced at write time.
    let huge = format!("1e{}", 999);
    let parsed = parse(&huge).unwrap();
    match parsed {
        JsonValue::Number(Number::Float(f)) => assert!(f.is_infinite()),
        other => panic!("expected float, got {other:?}"),
    }
}

#[test]
fn string_escapes() {
    assert_eq!(parse(r#""a\"b""#).unwrap(), JsonValue::from("a\"b"));
    assert_eq!(parse(r#""a\\b""#).unwrap(), JsonValue::from("a\\b"));
    assert_eq!(parse(r#""a\/b""#).unwrap(), JsonValue::from("a/b"));
    assert_eq!(
        parse(r#""\b\f\n\r\t""#).unwrap(),
        JsonValue::from("\u{0008}\u{000C}\n\r\t")
    );
    assert_eq!(parse(r#""A""#).unwrap(), JsonValue::from("A"));
    assert_eq!(parse(r#""é""#).unwrap(), JsonValue::from("é"));
}

#[test]
fn surrogate_pairs_combine() {
    assert_eq!(parse(r#""\uD83D\uDE00""#).unwrap(), JsonValue::from("\u{1F600}"));
    // Raw astral characters need no escaping at all.
    assert_eq!(parse("\"\u{1F600}\"").unwrap(), JsonValue::from("\u{1F600}"));
}

#[test]
fn unpaired_surrogate_is_rejected() {
    let err = parse(r#""\uD800x""#).unwrap_err();
    assert_eq!(err.kind, Kind::UnpairedSurrogate(0xD800));

    let err = parse(r#""\uDC00""#).unwrap_err();
    assert_eq!(err.kind, Kind::UnpairedSurrogate(0xDC00));
}

#[test]
fn empty_containers() {
    assert_eq!(parse("[]").unwrap(), JsonValue::Array(Vec::new()));
    assert_eq!(parse("{}").unwrap(), JsonValue::Object(OrderedMap::new()));
    assert_eq!(parse("[ ]").unwrap(), JsonValue::Array(Vec::new()));
    assert_eq!(parse("{ }").unwrap(), JsonValue::Object(OrderedMap::new()));
}

#[test]
fn nested_values() {
    let value = parse(r#"[1,[2,3],{"x":4}]"#).unwrap();

    assert_eq!(
        value,
        JsonValue::Array(vec![
            JsonValue::from(1),
            JsonValue::Array(vec![JsonValue::from(2), JsonValue::from(3)]),
            object(&[("x", JsonValue::from(4))]),
        ])
    );
}

#[test]
fn object_order_is_document_order() {
    let value = parse(r#"{"z":1,"a":2,"m":3}"#).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().collect();

    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn duplicate_keys_survive_parsing() {
    let value = parse(r#"{"a":1,"a":2}"#).unwrap();
    let obj = value.as_object().unwrap();

    assert_eq!(obj.len(), 2);
    // Lookups see the first occurrence.
    assert_eq!(obj.get("a"), Some(&JsonValue::from(1)));
}

#[test]
fn missing_value_error_points_at_the_rejected_char() {
    let err = parse(r#"{"a":}"#).unwrap_err();

    assert_eq!(err.kind, Kind::UnexpectedChar('}'));
    assert_eq!(err.position.offset, 5);
    assert_eq!(err.position.line, 1);
    assert_eq!(err.position.col, 6);
}

#[test]
fn error_positions() {
    let err = parse("").unwrap_err();
    assert_eq!(err.kind, Kind::UnexpectedEof);
    assert_eq!(err.position.offset, 0);

    let err = parse(r#""abc"#).unwrap_err();
    assert_eq!(err.kind, Kind::UnterminatedString);
    assert_eq!(err.position.offset, 4);

    let err = parse("[1,2").unwrap_err();
    assert_eq!(err.kind, Kind::MissingArrayBracket);
    assert_eq!(err.position.offset, 4);

    let err = parse(r#"{"a" 1}"#).unwrap_err();
    assert_eq!(err.kind, Kind::MissingColon);
    assert_eq!(err.position.offset, 5);

    let err = parse(r#"{1:2}"#).unwrap_err();
    assert_eq!(err.kind, Kind::MissingQuote);
    assert_eq!(err.position.offset, 1);

    let err = parse("tru").unwrap_err();
    assert_eq!(err.kind, Kind::NotABool);
    assert_eq!(err.position.offset, 0);

    let err = parse(r#""a\qb""#).unwrap_err();
    assert_eq!(err.kind, Kind::UnknownEscape('q'));
    assert_eq!(err.position.offset, 3);

    let err = parse(r#""\u00G1""#).unwrap_err();
    assert_eq!(err.kind, Kind::NotAnHex('G'));
    assert_eq!(err.position.offset, 5);

    let err = parse(r#""\u12"#).unwrap_err();
    assert_eq!(err.kind, Kind::UnterminatedEscape);
    assert_eq!(err.position.offset, 5);

    let err = parse("-x").unwrap_err();
    assert_eq!(err.kind, Kind::NotANumber);
    assert_eq!(err.position.offset, 1);

    let err = parse("@").unwrap_err();
    assert_eq!(err.kind, Kind::UnexpectedChar('@'));
    assert_eq!(err.position.offset, 0);
}

#[test]
fn error_positions_track_lines() {
    let err = parse("[\n  true,\n  nope\n]").unwrap_err();

    assert_eq!(err.kind, Kind::NotANull);
    assert_eq!(err.position.offset, 12);
    assert_eq!(err.position.line, 3);
    assert_eq!(err.position.col, 3);
}

#[test]
fn trailing_chars_are_rejected() {
    let err = parse("[1,2] x").unwrap_err();

    assert_eq!(err.kind, Kind::CharsAfterRoot("x".to_string()));
    assert_eq!(err.position.offset, 6);
}

#[test]
fn trailing_comma_is_rejected() {
    assert!(parse("[1,]").is_err());
    assert!(parse(r#"{"a":1,}"#).is_err());
}

#[test]
fn lenient_mode_returns_none() {
    assert_eq!(parse_opt("{"), None);
    assert_eq!(parse_opt("[1,2]"), Some(parse("[1,2]").unwrap()));
}

struct UniqueKeys;

impl Materialize for UniqueKeys {
    fn object(&self, entries: Vec<(String, JsonValue)>) -> Result<JsonValue, Kind> {
        let mut map = OrderedMap::with_capacity(entries.len());
        for (key, value) in entries {
            if map.contains_key(&key) {
                return Err(Kind::DuplicateKey(key));
            }
            map.push(key, value);
        }
        Ok(JsonValue::Object(map))
    }

    fn array(&self, items: Vec<JsonValue>) -> Result<JsonValue, Kind> {
        Ok(JsonValue::Array(items))
    }
}

#[test]
fn custom_materializer_can_enforce_unique_keys() {
    let err = parse_with(r#"{"a":1,"a":2}"#, &UniqueKeys).unwrap_err();
    assert_eq!(err.kind, Kind::DuplicateKey("a".to_string()));

    let ok = parse_with(r#"{"a":1,"b":2}"#, &UniqueKeys).unwrap();
    assert_eq!(ok, parse(r#"{"a":1,"b":2}"#).unwrap());
}

#[test]
fn reads_from_a_stream() {
    let value = from_reader(r#"{"a":[1,2]}"#.as_bytes()).unwrap();

    assert_eq!(value, parse(r#"{"a":[1,2]}"#).unwrap());
}

#[test]
fn stream_failures_surface_as_io_errors() {
    // Invalid UTF-8 never reaches the grammar.
    let err = from_reader(&[0xFFu8, 0xFE][..]).unwrap_err();

    assert!(matches!(err.kind, Kind::Io(_)));
}

#[test]
fn raw_control_chars_pass_through() {
    // The reader does not reject unescaped control characters.
    let value = parse("\"a\tb\"").unwrap();
    assert_eq!(value, JsonValue::from("a\tb"));
}
