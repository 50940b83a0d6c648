#![forbid(unsafe_code)]

//! Making payloads portable before they're stored.
//!
//! Two passes run, in order:
//!
//! 1. **CSS rewrite** (SVG only): every `light-dark(A, B)` becomes `A`. See
//!    [`rewrite_light_dark`].
//! 2. **Degenerate repair**: an image that the [`DegeneratePolicy`] calls too
//!    small to show is replaced by the matching placeholder, keeping the
//!    embedded source. See [`repair_png`] and [`repair_svg`].
//!
//! Each pass hands back its input when it has nothing to do. When a pass
//! fails to decode the payload, that error is returned as is.

use std::borrow::Cow;

use crate::{probe, Dimension, EncodedPayload, ImageFormat, ImprintResult, Placeholders};

mod css;
pub use css::*;

mod repair;
pub use repair::*;

/// Decides which payloads are too small to be a real image.
///
/// A payload is degenerate when its width *and* height are both at or below
/// the limits. An image whose size can't be found is never degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DegeneratePolicy {
  pub max_width: u32,
  pub max_height: u32,
}
impl DegeneratePolicy {
  #[inline]
  #[must_use]
  pub const fn is_degenerate(&self, size: Dimension) -> bool {
    size.width <= self.max_width && size.height <= self.max_height
  }
}
impl Default for DegeneratePolicy {
  /// 1x1 or smaller.
  #[inline]
  fn default() -> Self {
    Self { max_width: 1, max_height: 1 }
  }
}

/// Which passes [`Normalizer::normalize`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizeOptions {
  pub rewrite_light_dark: bool,
  pub repair_degenerate: bool,
  pub degenerate: DegeneratePolicy,
}
impl Default for NormalizeOptions {
  #[inline]
  fn default() -> Self {
    Self { rewrite_light_dark: true, repair_degenerate: true, degenerate: DegeneratePolicy::default() }
  }
}

/// Runs the normalization passes against a fixed set of placeholders.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'p> {
  placeholders: &'p Placeholders,
  options: NormalizeOptions,
}
impl<'p> Normalizer<'p> {
  #[inline]
  #[must_use]
  pub const fn new(placeholders: &'p Placeholders, options: NormalizeOptions) -> Self {
    Self { placeholders, options }
  }

  #[inline]
  #[must_use]
  pub const fn options(&self) -> NormalizeOptions {
    self.options
  }

  /// Runs every enabled pass over the payload.
  ///
  /// The result has the same format as the input. If no pass changed anything
  /// the result is a copy of the input, body text included.
  pub fn normalize(&self, payload: &EncodedPayload) -> ImprintResult<EncodedPayload> {
    let format = payload.format();
    if !self.options.rewrite_light_dark && !self.options.repair_degenerate {
      return Ok(payload.clone());
    }
    let mut bytes = payload.decode()?;
    let mut changed = false;

    if self.options.rewrite_light_dark && format == ImageFormat::Svg {
      let rewritten = match rewrite_light_dark(core::str::from_utf8(&bytes)?) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
      };
      if let Some(s) = rewritten {
        log::debug!("rewrote light-dark() colors ({} -> {} bytes)", bytes.len(), s.len());
        bytes = s.into_bytes();
        changed = true;
      }
    }

    if self.options.repair_degenerate {
      if let Some(repaired) = self.repair_degenerate(format, &bytes)? {
        bytes = repaired;
        changed = true;
      }
    }

    if changed {
      Ok(EncodedPayload::from_bytes(format, &bytes))
    } else {
      Ok(payload.clone())
    }
  }

  /// The repair pass alone, over decoded bytes.
  ///
  /// `Ok(None)` when the image isn't degenerate, or when it is but there's no
  /// embedded source to carry over to the placeholder.
  pub fn repair_degenerate(&self, format: ImageFormat, bytes: &[u8]) -> ImprintResult<Option<Vec<u8>>> {
    let Some(size) = probe(bytes, format)? else {
      return Ok(None);
    };
    if !self.options.degenerate.is_degenerate(size) {
      return Ok(None);
    }
    let repaired = match format {
      ImageFormat::Png => repair_png(bytes, self.placeholders.png())?,
      ImageFormat::Svg => {
        repair_svg(core::str::from_utf8(bytes)?, self.placeholders.svg())?.map(String::into_bytes)
      }
    };
    match &repaired {
      Some(_) => log::debug!("replaced degenerate {format} ({}x{}) with placeholder", size.width, size.height),
      None => log::warn!("degenerate {format} ({}x{}) has no embedded source to keep", size.width, size.height),
    }
    Ok(repaired)
  }
}
