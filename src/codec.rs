#![forbid(unsafe_code)]

//! Base64 conversions for payload bodies.
//!
//! Text is always converted through its UTF-8 bytes, in both directions, so
//! that any Unicode text survives the trip exactly. Anything that decodes to
//! bytes which aren't UTF-8 is an error, never a lossy string.

use std::borrow::Cow;

use base64::{
  alphabet,
  engine::{
    general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
    DecodePaddingMode,
  },
  Engine,
};

use crate::DecodeError;

/// Data URL bodies that end in `=` must carry exactly the right padding.
const PADDED_BODY: GeneralPurpose = data_url_engine(DecodePaddingMode::RequireCanonical);

/// Data URL bodies may also leave the padding off entirely.
const UNPADDED_BODY: GeneralPurpose = data_url_engine(DecodePaddingMode::RequireNone);

/// Leftover bits in the final symbol are ignored, same as a browser.
const fn data_url_engine(padding: DecodePaddingMode) -> GeneralPurpose {
  GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(padding).with_decode_allow_trailing_bits(true),
  )
}

/// Encodes bytes as padded standard base64. Never fails.
#[inline]
#[must_use]
pub fn bytes_to_base64(bytes: &[u8]) -> String {
  STANDARD.encode(bytes)
}

/// Decodes base64 into bytes.
///
/// ASCII whitespace is skipped (data URLs are sometimes line wrapped). Any
/// other character outside the alphabet, or a bad amount of padding, is an
/// error.
pub fn base64_to_bytes(body: &str) -> Result<Vec<u8>, DecodeError> {
  let body = strip_ascii_whitespace(body);
  let engine = if body.ends_with('=') { &PADDED_BODY } else { &UNPADDED_BODY };
  Ok(engine.decode(body.as_bytes())?)
}

/// Encodes the UTF-8 bytes of some text as base64.
#[inline]
#[must_use]
pub fn text_to_base64(text: &str) -> String {
  bytes_to_base64(text.as_bytes())
}

/// Decodes base64 and reads the bytes as UTF-8 text.
pub fn base64_to_text(body: &str) -> Result<String, DecodeError> {
  let bytes = base64_to_bytes(body)?;
  String::from_utf8(bytes).map_err(|e| DecodeError::Utf8(e.utf8_error()))
}

fn strip_ascii_whitespace(body: &str) -> Cow<'_, str> {
  if body.bytes().any(|b| b.is_ascii_whitespace()) {
    Cow::Owned(body.chars().filter(|c| !c.is_ascii_whitespace()).collect())
  } else {
    Cow::Borrowed(body)
  }
}
