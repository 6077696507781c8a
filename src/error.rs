use crate::input::Input;
use nom::error::{ErrorKind, FromExternalError, ParseError};
use std::fmt;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// Location of a parse failure: where the next unread character sits in the
/// original document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based character index.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Kind {
    UnexpectedEof,
    UnexpectedChar(char),
    UnknownEscape(char),
    UnterminatedString,
    UnterminatedEscape,
    NotAnHex(char),
    UnpairedSurrogate(u32),
    NotANumber,
    NotABool,
    NotANull,
    MissingColon,
    MissingQuote,
    MissingArrayBracket,
    MissingObjectBracket,
    CharsAfterRoot(String),
    DuplicateKey(String),
    Io(std::io::ErrorKind),
    NomError(nom::error::ErrorKind),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::UnexpectedEof => write!(f, "unexpected end of input"),
            Kind::UnexpectedChar(c) => write!(f, "unexpected char: '{c}'"),
            Kind::UnknownEscape(c) => write!(f, "unknown escape code: '\\{c}'"),
            Kind::UnterminatedString => write!(f, "unterminated string"),
            Kind::UnterminatedEscape => write!(f, "unterminated unicode escape"),
            Kind::NotAnHex(c) => write!(f, "expected hex digit, got '{c}'"),
            Kind::UnpairedSurrogate(n) => write!(f, "unpaired surrogate \\u{n:04X}"),
            Kind::NotANumber => write!(f, "malformed number"),
            Kind::NotABool => write!(f, "malformed boolean literal"),
            Kind::NotANull => write!(f, "malformed null literal"),
            Kind::MissingColon => write!(f, "expected ':'"),
            Kind::MissingQuote => write!(f, "expected '\"'"),
            Kind::MissingArrayBracket => write!(f, "expected ']'"),
            Kind::MissingObjectBracket => write!(f, "expected '}}'"),
            Kind::CharsAfterRoot(s) => write!(f, "unexpected chars after root value: '{s}'"),
            Kind::DuplicateKey(k) => write!(f, "duplicate key: '{k}'"),
            Kind::Io(e) => write!(f, "i/o error: {e:?}"),
            Kind::NomError(e) => write!(f, "parse error: {}", e.description()),
        }
    }
}

/// Error returned by the reader. Carries the position of the character the
/// reader rejected.
#[derive(Debug, PartialEq)]
pub struct Error {
    pub position: Position,
    pub kind: Kind,
}

impl Error {
    pub fn new(position: Position, kind: Kind) -> Self {
        Self { position, kind }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JSON error at index {} (line {}, col {}): {}",
            self.position.offset, self.position.line, self.position.col, self.kind
        )
    }
}

impl std::error::Error for Error {}

impl From<ParseIntError> for Error {
    fn from(_value: ParseIntError) -> Self {
        Self::new(Position::default(), Kind::NotANumber)
    }
}

impl From<ParseFloatError> for Error {
    fn from(_value: ParseFloatError) -> Self {
        Self::new(Position::default(), Kind::NotANumber)
    }
}

impl<'a> ParseError<Input<'a>> for Error {
    fn from_error_kind(input: Input<'a>, kind: ErrorKind) -> Self {
        Self {
            position: input.position(),
            kind: Kind::NomError(kind),
        }
    }

    fn append(input: Input<'a>, kind: ErrorKind, _other: Self) -> Self {
        Self {
            position: input.position(),
            kind: Kind::NomError(kind),
        }
    }
}

impl<'a, T> FromExternalError<Input<'a>, T> for Error {
    fn from_external_error(input: Input<'a>, kind: ErrorKind, _e: T) -> Self {
        Self::new(input.position(), Kind::NomError(kind))
    }
}

/// Error returned by the writer.
///
/// Asking the writer for a value JSON cannot express is a programming error,
/// not a data error; the only data-independent failures are sink failures.
#[derive(Debug, PartialEq)]
pub enum WriteError {
    /// NaN or an infinity has no JSON representation.
    NonFinite(f64),
    Fmt,
    Io(std::io::ErrorKind),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::NonFinite(v) => write!(f, "cannot write non-finite number: {v}"),
            WriteError::Fmt => write!(f, "formatter error"),
            WriteError::Io(e) => write!(f, "i/o error: {e:?}"),
        }
    }
}

impl std::error::Error for WriteError {}

impl From<fmt::Error> for WriteError {
    fn from(_value: fmt::Error) -> Self {
        WriteError::Fmt
    }
}

impl From<std::io::Error> for WriteError {
    fn from(value: std::io::Error) -> Self {
        WriteError::Io(value.kind())
    }
}
