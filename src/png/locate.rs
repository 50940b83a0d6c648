use crate::{ImprintResult, Span};

use super::*;

/// Finds the first chunk of the given type.
///
/// The span covers the entire chunk, so it can be moved as a unit. `Ok(None)`
/// means the walk reached `IEND` (or ran out of bytes) without a match.
///
/// ## Failure
/// * The bytes don't start with the PNG signature.
/// * A chunk before the match declares a length that runs past the end of the
///   buffer.
pub fn locate_chunk(png: &[u8], ty: ChunkTy) -> ImprintResult<Option<Span>> {
  for chunk in RawChunkIter::new(png)? {
    let chunk = chunk?;
    log::trace!("{} chunk at {:?}", chunk.ty(), chunk.span());
    if chunk.ty() == ty {
      return Ok(Some(chunk.span()));
    }
  }
  Ok(None)
}

/// Finds the first `tEXt` chunk, which is where embedded payloads live.
#[inline]
pub fn locate_text_chunk(png: &[u8]) -> ImprintResult<Option<Span>> {
  locate_chunk(png, ChunkTy::tEXt)
}
