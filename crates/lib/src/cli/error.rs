use core::fmt;
use core::ops::Range;

/// A line and column combination, 1-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    col: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Resolve the position of a byte span within the given source data.
pub fn position(data: &[u8], span: Range<usize>) -> LineCol {
    let start = span.start.min(data.len());
    let head = data.get(..start).unwrap_or_default();

    let line = memchr::memchr_iter(b'\n', head).count();

    let col = match memchr::memrchr(b'\n', head) {
        Some(nl) => start - nl,
        None => start + 1,
    };

    LineCol::new(line + 1, col)
}
