#![forbid(unsafe_code)]

use core::ops::Range;

use crate::RangeError;

/// A half-open `start..end` range of byte offsets within a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
  pub start: usize,
  pub end: usize,
}
impl Span {
  #[inline]
  #[must_use]
  pub const fn new(start: usize, end: usize) -> Self {
    Self { start, end }
  }

  /// Number of bytes covered. An inverted span counts as zero.
  #[inline]
  #[must_use]
  pub const fn len(self) -> usize {
    self.end.saturating_sub(self.start)
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.len() == 0
  }

  /// Gets the bytes this span covers, if it fits within the buffer.
  #[inline]
  pub fn slice(self, bytes: &[u8]) -> Result<&[u8], RangeError> {
    if self.start <= self.end && self.end <= bytes.len() {
      Ok(&bytes[self.start..self.end])
    } else {
      Err(RangeError { start: self.start, end: self.end, len: bytes.len() })
    }
  }
}
impl From<Range<usize>> for Span {
  #[inline]
  fn from(r: Range<usize>) -> Self {
    Self { start: r.start, end: r.end }
  }
}
impl From<Span> for Range<usize> {
  #[inline]
  fn from(s: Span) -> Self {
    s.start..s.end
  }
}

/// Makes a new buffer that's `dest` with `dest_span` swapped out for the
/// `source_span` bytes of `source`.
///
/// The two spans don't need to be the same length, the output just grows or
/// shrinks as needed. Neither input is modified.
///
/// ```
/// # use imprint::{splice, Span};
/// let out = splice(b"abcdef", Span::new(1, 3), b"XYZ", Span::new(0, 3)).unwrap();
/// assert_eq!(out, b"aXYZdef");
/// ```
pub fn splice(
  dest: &[u8], dest_span: Span, source: &[u8], source_span: Span,
) -> Result<Vec<u8>, RangeError> {
  let middle = source_span.slice(source)?;
  dest_span.slice(dest)?;
  let mut out = Vec::with_capacity(dest.len() - dest_span.len() + middle.len());
  out.extend_from_slice(&dest[..dest_span.start]);
  out.extend_from_slice(middle);
  out.extend_from_slice(&dest[dest_span.end..]);
  Ok(out)
}
