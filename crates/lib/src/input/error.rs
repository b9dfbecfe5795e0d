use core::fmt;
use core::ops::Range;

use bstr::BStr;

/// The ways a game log can fail to parse.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    ExpectedByte(char),
    ExpectedKeyword(&'static str),
    UnknownColor(&'static BStr),
    DuplicateColor(&'static str),
    EmptyDraw,
    Trailing(&'static BStr),
    UnexpectedEof,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedByte(b) => write!(f, "expected `{b}`"),
            ErrorKind::ExpectedKeyword(keyword) => write!(f, "expected keyword `{keyword}`"),
            ErrorKind::UnknownColor(word) => write!(f, "unknown color {word:?}"),
            ErrorKind::DuplicateColor(color) => write!(f, "color `{color}` repeated in draw"),
            ErrorKind::EmptyDraw => write!(f, "empty draw"),
            ErrorKind::Trailing(data) => write!(f, "trailing input {data:?}"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Error raised through input processing.
#[derive(Debug)]
pub struct InputError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl InputError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte span of the offending input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for InputError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for InputError {}
