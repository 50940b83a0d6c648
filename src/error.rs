use core::str::Utf8Error;

use thiserror::Error;

/// Text or base64 that couldn't be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
  /// The body has a character outside the base64 alphabet, or bad padding.
  #[error("invalid base64: {0}")]
  Base64(#[from] base64::DecodeError),

  /// The decoded bytes aren't UTF-8 text.
  #[error("decoded bytes are not valid UTF-8: {0}")]
  Utf8(#[from] Utf8Error),

  /// The string doesn't start with `data:`.
  #[error("not a data URL")]
  NotDataUrl,

  /// A data URL without the `;base64,` marker.
  #[error("data URL is not base64 encoded")]
  NotBase64DataUrl,

  /// A data URL with a mime type that isn't `image/svg+xml` or `image/png`.
  #[error("unsupported mime type `{0}`")]
  UnknownMime(String),
}

/// The bytes decoded fine, but they don't have the shape of the declared
/// container format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
  /// The first 8 bytes aren't the PNG signature.
  #[error("missing PNG signature")]
  NoSignature,

  /// A chunk declares more data than the buffer holds.
  #[error("chunk at offset {offset} declares {declared} data bytes, past the end of the buffer")]
  ChunkOverrun { offset: usize, declared: u32 },

  /// The first chunk isn't a complete `IHDR`.
  #[error("missing or truncated IHDR chunk")]
  MissingHeader,

  /// A PNG that needs a `tEXt` chunk doesn't have one.
  #[error("missing tEXt chunk")]
  MissingText,

  /// The text isn't a well-formed document with an `svg` root element.
  #[error("not an SVG document: {0}")]
  NotSvg(String),
}

/// A byte span that doesn't fit within its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("span {start}..{end} is out of bounds for a buffer of {len} bytes")]
pub struct RangeError {
  pub start: usize,
  pub end: usize,
  pub len: usize,
}

/// An error from the `imprint` crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImprintError {
  /// Malformed base64, or text that isn't UTF-8.
  #[error(transparent)]
  Decode(#[from] DecodeError),

  /// The decoded bytes aren't the PNG or SVG they claim to be.
  #[error("malformed container: {0}")]
  MalformedContainer(#[from] ContainerError),

  /// A chunk or splice span falls outside its buffer.
  #[error(transparent)]
  Range(#[from] RangeError),
}
impl ImprintError {
  /// If this error came from the decode stage (base64 / UTF-8 / data URL).
  #[inline]
  #[must_use]
  pub const fn is_decode(&self) -> bool {
    matches!(self, Self::Decode(_))
  }
}
impl From<base64::DecodeError> for ImprintError {
  #[inline]
  fn from(e: base64::DecodeError) -> Self {
    Self::Decode(DecodeError::Base64(e))
  }
}
impl From<Utf8Error> for ImprintError {
  #[inline]
  fn from(e: Utf8Error) -> Self {
    Self::Decode(DecodeError::Utf8(e))
  }
}

pub type ImprintResult<T> = Result<T, ImprintError>;
