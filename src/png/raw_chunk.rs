use crate::{parser_helpers::*, ContainerError, Span};

use super::*;

/// An unparsed chunk from a PNG, along with where it sits in the buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawChunk<'b> {
  ty: ChunkTy,
  data: &'b [u8],
  declared_crc: u32,
  span: Span,
}
impl<'b> RawChunk<'b> {
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> ChunkTy {
    self.ty
  }
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// The whole chunk: length, type, data, and CRC.
  #[inline]
  #[must_use]
  pub const fn span(&self) -> Span {
    self.span
  }
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    chunk_crc(self.ty, self.data)
  }
}
impl core::fmt::Debug for RawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawChunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .field("span", &self.span)
      .finish()
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// * Stops after an `IEND` chunk.
/// * Stops when there isn't room left for another length and type.
/// * Yields one `Err` and then stops if a chunk's declared length runs past the
///   end of the buffer.
///
/// Any input at all can be walked without panicking.
#[derive(Debug, Clone)]
pub struct RawChunkIter<'b> {
  bytes: &'b [u8],
  cursor: usize,
  done: bool,
}
impl<'b> RawChunkIter<'b> {
  /// Pass the full PNG bytes, the signature is checked and skipped.
  #[inline]
  pub fn new(bytes: &'b [u8]) -> Result<Self, ContainerError> {
    if is_png_signature_correct(bytes) {
      Ok(Self { bytes, cursor: PNG_SIGNATURE.len(), done: false })
    } else {
      Err(ContainerError::NoSignature)
    }
  }
}
impl<'b> Iterator for RawChunkIter<'b> {
  type Item = Result<RawChunk<'b>, ContainerError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    let start = self.cursor;
    let rest = &self.bytes[start..];
    let Some((declared, rest)) = try_split_off_u32_be(rest) else {
      self.done = true;
      return None;
    };
    let Some((ty, rest)) = try_split_off_byte_array::<4>(rest) else {
      self.done = true;
      return None;
    };
    let data_len = declared as usize;
    if rest.len() < data_len || rest.len() - data_len < 4 {
      self.done = true;
      return Some(Err(ContainerError::ChunkOverrun { offset: start, declared }));
    }
    let (data, rest) = rest.split_at(data_len);
    let (declared_crc, _) = try_split_off_u32_be(rest)?;
    let ty = ChunkTy(ty);
    let end = start + 12 + data_len;
    self.cursor = end;
    self.done = ty == ChunkTy::IEND;
    Some(Ok(RawChunk { ty, data, declared_crc, span: Span::new(start, end) }))
  }
}
