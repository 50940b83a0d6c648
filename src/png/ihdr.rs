use bytemuck::{Pod, Zeroable};

use crate::{int_endian::U32BE, ContainerError};

use super::*;

/// Image Header, the data of the first chunk of every PNG.
///
/// Spec: [IHDR](https://www.w3.org/TR/png/#11IHDR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct IHDR {
  width: U32BE,
  height: U32BE,
  bit_depth: u8,
  color_type: u8,
  compression_method: u8,
  filter_method: u8,
  interlace_method: u8,
}
impl IHDR {
  /// Color type value for 3 channel RGB.
  pub const COLOR_TYPE_RGB: u8 = 2;

  /// Header for a non-interlaced, 8 bits per channel RGB image.
  #[inline]
  #[must_use]
  pub const fn new_rgb8(width: u32, height: u32) -> Self {
    Self {
      width: U32BE::from_u32(width),
      height: U32BE::from_u32(height),
      bit_depth: 8,
      color_type: Self::COLOR_TYPE_RGB,
      compression_method: 0,
      filter_method: 0,
      interlace_method: 0,
    }
  }

  /// width in pixels
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width.to_u32()
  }

  /// height in pixels
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height.to_u32()
  }

  #[inline]
  #[must_use]
  pub const fn bit_depth(&self) -> u8 {
    self.bit_depth
  }

  #[inline]
  #[must_use]
  pub const fn color_type(&self) -> u8 {
    self.color_type
  }

  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method != 0
  }

  /// The 13 data bytes of this header, as they appear in the chunk.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }

  /// Reads the header out of full PNG bytes.
  ///
  /// The header must be the very first chunk. If that chunk is some other type,
  /// isn't exactly 13 bytes, or is cut off by the end of the buffer then you get
  /// [`ContainerError::MissingHeader`].
  pub fn from_png(png: &[u8]) -> Result<Self, ContainerError> {
    match RawChunkIter::new(png)?.next() {
      Some(Ok(chunk)) if chunk.ty() == ChunkTy::IHDR => {
        Self::try_from(chunk.data()).map_err(|_| ContainerError::MissingHeader)
      }
      _ => Err(ContainerError::MissingHeader),
    }
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = ();
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    bytemuck::try_pod_read_unaligned(data).map_err(|_| ())
  }
}
