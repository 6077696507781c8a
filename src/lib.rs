#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::needless_doctest_main)]
//! This crate is a self-contained json value model, parser and writer. Objects keep their keys in insertion order, and domain types can opt into serialization through an explicit trait instead of a framework. It is also compatible with [serde](https://serde.rs/) so you can hand a parsed value to anything that consumes a [Serialize](https://docs.rs/serde/latest/serde/ser/trait.Serialize.html)
//!
//! ## Why use it ?
//!
//! Most json libraries either hash object keys (losing document order) or
//! pull in a whole serialization framework. Here the object representation
//! is an ordered map, the parser reports the exact character offset of any
//! error, and writing is one trait method away for your own types.
//!
//! ## How to use it ?
//!
//! ### Parsing
//!
//! ```rust
//! use ordered_json::{parse, write, JsonValue};
//!
//! fn main() {
//!     let value = parse(r#"{"b":1,"a":[true,null]}"#).unwrap();
//!
//!     assert_eq!(value.get("b"), Some(&JsonValue::from(1)));
//!     // Compact output, entries in document order.
//!     assert_eq!(write(&value).unwrap(), r#"{"b":1,"a":[true,null]}"#);
//! }
//! ```
//!
//! Parse errors carry the zero-based offset (plus line and column) of the
//! rejected character:
//!
//! ```rust
//! let err = ordered_json::parse(r#"{"a":}"#).unwrap_err();
//!
//! assert_eq!(err.position.offset, 5);
//! ```
//!
//! ### Writing your own types
//!
//! ```rust
//! use ordered_json::{write_json, JsonValue, OrderedMap, ToJson};
//!
//! struct Player {
//!     name: String,
//!     score: i32,
//! }
//!
//! impl ToJson for Player {
//!     fn to_json(&self) -> JsonValue {
//!         let mut map = OrderedMap::new();
//!         map.insert("name", JsonValue::from(self.name.as_str()));
//!         map.insert("score", JsonValue::from(self.score));
//!         JsonValue::Object(map)
//!     }
//! }
//!
//! fn main() {
//!     let player = Player {
//!         name: "ada".into(),
//!         score: 3,
//!     };
//!
//!     assert_eq!(write_json(&player).unwrap(), r#"{"name":"ada","score":3}"#);
//! }
//! ```
//!
//! ### Serializing into the serde ecosystem
//!
//! ```rust
//! let parsed = ordered_json::parse(r#"{"hello":"world"}"#).unwrap();
//!
//! let text = serde_json::to_string(&parsed).unwrap();
//!
//! assert_eq!(text, r#"{"hello":"world"}"#);
//! ```

extern crate bytecount;
extern crate memchr;
extern crate nom;
extern crate serde;

mod input;
mod parser;
mod ser;
mod to_json;
mod writer;

pub mod error;
pub mod map;
pub mod value;

pub use map::OrderedMap;
pub use parser::{from_reader, parse, parse_opt, parse_with, Materialize, Standard};
pub use to_json::ToJson;
pub use value::{JsonValue, Number};
pub use writer::{write, write_io, write_json, write_opt, write_to};
