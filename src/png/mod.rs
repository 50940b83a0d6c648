//! Module for working with PNG chunk structure.
//!
//! * [Portable Network Graphics Specification (Third Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/png/
//!
//! A PNG is an 8 byte signature followed by a flat list of "chunks". Each
//! chunk is self-delimiting:
//!
//! ```text
//! length: u32 BE | type: 4 ASCII bytes | data: `length` bytes | crc: u32 BE
//! ```
//!
//! There's no outer table of offsets, so any single chunk can be cut out of one
//! PNG and dropped into another without recomputing anything outside of that
//! chunk. That's the whole trick this crate uses to move embedded text between
//! images: the textual chunk is moved as an opaque unit, CRC and all.
//!
//! This module does *not* decode pixel data. The only pixel handling is the
//! tiny [encoder](png_encode_rgb8) used to build placeholder images.
//!
//! ## Parsing Rules
//!
//! * The signature is always checked. Bytes that aren't a PNG get
//!   [`ContainerError::NoSignature`](crate::ContainerError::NoSignature).
//! * Chunks are walked by their length fields, starting right after the
//!   signature, and the walk stops after `IEND`.
//! * If the buffer runs out before another length and type can be read, the
//!   walk just ends. If a chunk *declares* more data than the buffer holds,
//!   that's a [`ChunkOverrun`](crate::ContainerError::ChunkOverrun) error.
//! * Declared CRC values are carried along but never checked.

mod crc32;
pub use crc32::*;

mod raw_chunk;
pub use raw_chunk::*;

mod locate;
pub use locate::*;

mod ihdr;
pub use ihdr::*;

mod text;
pub use text::*;

mod write;
pub use write::*;


use core::fmt::Write;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the bytes start with the PNG signature.
#[inline]
#[must_use]
pub const fn is_png_signature_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// The 4 byte tag naming a chunk's type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkTy {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const tEXt: Self = Self(*b"tEXt");

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }
}
impl From<[u8; 4]> for ChunkTy {
  #[inline]
  fn from(tag: [u8; 4]) -> Self {
    Self(tag)
  }
}
impl TryFrom<&str> for ChunkTy {
  type Error = ();
  /// Only 4 ASCII letters make a valid tag.
  #[inline]
  fn try_from(tag: &str) -> Result<Self, Self::Error> {
    let tag: [u8; 4] = tag.as_bytes().try_into().map_err(|_| ())?;
    if tag.iter().all(u8::is_ascii_alphabetic) {
      Ok(Self(tag))
    } else {
      Err(())
    }
  }
}
impl core::fmt::Debug for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')
  }
}
impl core::fmt::Display for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
