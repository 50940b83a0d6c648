use crate::RangeError;

use super::*;

/// The largest data length a chunk is allowed to declare.
pub const MAX_CHUNK_LEN: usize = (1 << 31) - 1;

/// Appends one complete chunk (length, type, data, CRC) to the output.
pub fn push_chunk(out: &mut Vec<u8>, ty: ChunkTy, data: &[u8]) -> Result<(), RangeError> {
  if data.len() > MAX_CHUNK_LEN {
    return Err(RangeError { start: 0, end: data.len(), len: MAX_CHUNK_LEN });
  }
  out.reserve(12 + data.len());
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(ty.as_bytes());
  out.extend_from_slice(data);
  out.extend_from_slice(&chunk_crc(ty, data).to_be_bytes());
  Ok(())
}

/// Encodes 8-bit RGB pixels as a minimal PNG.
///
/// The output is `IHDR`, then one `tEXt` per text entry, then a single `IDAT`
/// (every scanline uses filter type 0), then `IEND`. Pixels are row-major.
///
/// Gives `None` if either dimension is 0 or the pixel count doesn't match.
#[must_use]
pub fn png_encode_rgb8(
  width: u32, height: u32, pixels: &[[u8; 3]], texts: &[tEXt<'_>],
) -> Option<Vec<u8>> {
  let w = usize::try_from(width).ok()?;
  let h = usize::try_from(height).ok()?;
  if w == 0 || h == 0 || w.checked_mul(h)? != pixels.len() {
    return None;
  }
  let mut filtered = Vec::with_capacity((w * 3 + 1) * h);
  for line in pixels.chunks_exact(w) {
    filtered.push(0);
    filtered.extend_from_slice(bytemuck::cast_slice(line));
  }
  let zlib = miniz_oxide::deflate::compress_to_vec_zlib(&filtered, 6);

  let mut out = PNG_SIGNATURE.to_vec();
  push_chunk(&mut out, ChunkTy::IHDR, IHDR::new_rgb8(width, height).as_bytes()).ok()?;
  for text in texts {
    push_chunk(&mut out, ChunkTy::tEXt, &text.to_data()).ok()?;
  }
  push_chunk(&mut out, ChunkTy::IDAT, &zlib).ok()?;
  push_chunk(&mut out, ChunkTy::IEND, &[]).ok()?;
  Some(out)
}
