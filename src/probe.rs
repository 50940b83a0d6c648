#![forbid(unsafe_code)]

use crate::{png::IHDR, svg::SvgRoot, ContainerError, ImageFormat, ImprintResult};

/// Pixel size of an image, as declared by its metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimension {
  pub width: u32,
  pub height: u32,
}
impl Dimension {
  #[inline]
  #[must_use]
  pub const fn new(width: u32, height: u32) -> Self {
    Self { width, height }
  }
}

/// Gets the size of decoded image bytes without decoding any pixels.
///
/// `Ok(None)` means the bytes are the right kind of container but don't say
/// how big the image is.
///
/// * **PNG:** width and height from the `IHDR` chunk, which must be the first
///   chunk. A missing signature is an error, a missing or cut off header is
///   `None`.
/// * **SVG:** the root element's `width` and `height` (plain numbers or `px`).
///   Whichever of those is missing or uses some other unit is taken from the
///   `viewBox` instead. Fractions round to the nearest pixel.
pub fn probe(bytes: &[u8], format: ImageFormat) -> ImprintResult<Option<Dimension>> {
  match format {
    ImageFormat::Png => probe_png(bytes),
    ImageFormat::Svg => probe_svg(core::str::from_utf8(bytes)?),
  }
}

/// PNG half of [`probe`].
pub fn probe_png(png: &[u8]) -> ImprintResult<Option<Dimension>> {
  match IHDR::from_png(png) {
    Ok(header) => Ok(Some(Dimension::new(header.width(), header.height()))),
    Err(ContainerError::MissingHeader) => Ok(None),
    Err(e) => Err(e.into()),
  }
}

/// SVG half of [`probe`].
pub fn probe_svg(svg: &str) -> ImprintResult<Option<Dimension>> {
  let root = SvgRoot::parse(svg)?;
  let view_box = root.view_box.as_deref().and_then(parse_view_box);
  let width = root.width.as_deref().and_then(parse_length).or(view_box.map(|(w, _)| w));
  let height = root.height.as_deref().and_then(parse_length).or(view_box.map(|(_, h)| h));
  Ok(width.zip(height).map(|(width, height)| Dimension { width, height }))
}

fn parse_length(s: &str) -> Option<u32> {
  let s = s.trim();
  let s = s.strip_suffix("px").unwrap_or(s);
  to_pixels(s.trim_end().parse().ok()?)
}

/// `min-x min-y width height`, separated by whitespace and/or commas.
fn parse_view_box(s: &str) -> Option<(u32, u32)> {
  let numbers: Vec<f64> = s
    .split(|c: char| c.is_ascii_whitespace() || c == ',')
    .filter(|part| !part.is_empty())
    .map(str::parse)
    .collect::<Result<_, _>>()
    .ok()?;
  match numbers[..] {
    [_, _, w, h] => Some((to_pixels(w)?, to_pixels(h)?)),
    _ => None,
  }
}

#[inline]
fn to_pixels(f: f64) -> Option<u32> {
  if f.is_finite() && f >= 0.0 && f <= f64::from(u32::MAX) {
    Some(f.round() as u32)
  } else {
    None
  }
}
