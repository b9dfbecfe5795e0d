//! Input parser.

mod error;

use core::mem;
use core::ops;
use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{ErrorKind, InputError};

type Result<T> = std::result::Result<T, InputError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// Tracks the absolute byte position in the original data so that errors can
/// be reported with a span.
#[derive(Debug, Clone, Copy)]
pub struct Input {
    data: &'static [u8],
    index: usize,
}

impl Input {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8]) -> Self {
        Self { data, index: 0 }
    }

    #[inline]
    const fn new_at(data: &'static [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Absolute position of the remaining input.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.as_data())
    }

    /// Parse the next value as `T`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try to parse the next value as `T`, returns `None` if there is no more
    /// data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Iterate over the lines of the input.
    #[inline]
    pub fn lines(&mut self) -> Split<'_> {
        self.split(NL)
    }

    /// Iterate over segments separated by the given byte.
    #[inline]
    pub fn split(&mut self, byte: u8) -> Split<'_> {
        Split { input: self, byte }
    }

    /// Split at the given byte, erroring if it is not present in the
    /// remaining input.
    pub fn until(&mut self, b: u8) -> Result<Input> {
        let index = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            return Err(InputError::new(
                index..index.saturating_add(self.data.len()),
                ErrorKind::ExpectedByte(b as char),
            ));
        };

        let data = self.data.get(..at).unwrap_or_default();
        self.advance(at.saturating_add(1));
        Ok(Input::new_at(data, index))
    }

    /// Drop ASCII whitespace from both ends of the remaining input.
    pub fn trim(&mut self) {
        let n = self.find(0, |b| !b.is_ascii_whitespace());
        self.advance(n);

        let mut len = self.data.len();

        while let Some(b) = len.checked_sub(1).and_then(|n| self.data.get(n)) {
            if !b.is_ascii_whitespace() {
                break;
            }

            len -= 1;
        }

        self.data = self.data.get(..len).unwrap_or_default();
    }

    /// Try to parse the next whitespace-separated word, returning its offset
    /// relative to the current position.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(usize, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((s, value)))
    }

    /// Split once at the given byte or until the end of input, returning the
    /// segment associated with the split.
    #[inline]
    fn split_once(&mut self, b: u8) -> Option<Input> {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            self.index = self.index.saturating_add(self.data.len());
            let data = mem::take(&mut self.data);
            return Some(Input::new_at(data, index));
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(Input::new_at(data, index))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<Input> {
        let index = self.index.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// Iterator over byte-separated segments of an [Input].
pub struct Split<'a> {
    input: &'a mut Input,
    byte: u8,
}

impl Iterator for Split<'_> {
    type Item = Input;

    #[inline]
    fn next(&mut self) -> Option<Input> {
        self.input.split_once(self.byte)
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind to use when a required value is absent.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Optionally parse a value, `None` if the input is exhausted.
    fn try_from_input(p: &mut Input) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut Input) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(InputError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

impl FromInput for u32 {
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let index = p.index;

        let Some((n, word)) = p.try_next_word::<&str>()? else {
            return Ok(None);
        };

        let Ok(value) = word.parse() else {
            return Err(InputError::new(
                index.saturating_add(n)..p.index,
                ErrorKind::NotInteger(word),
            ));
        };

        Ok(Some(value))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        Ok(Some(mem::take(&mut p.data)))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(InputError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl FromInput for &'static BStr {
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>> {
        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        Ok(Some(BStr::new(data)))
    }
}
