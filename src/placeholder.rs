#![forbid(unsafe_code)]

use crate::{
  png::{locate_text_chunk, png_encode_rgb8, tEXt, IHDR},
  probe::Dimension,
  svg::SvgRoot,
  ContainerError, EncodedPayload, ImageFormat, ImprintResult,
};

/// Size of both canonical placeholder images.
pub const PLACEHOLDER_SIZE: Dimension = Dimension::new(270, 183);

/// The canonical placeholder SVG: a white card reading "MarkMap".
pub const PLACEHOLDER_SVG: &str = concat!(
  r#"<svg xmlns="http://www.w3.org/2000/svg" width="270" height="183">"#,
  r##"<rect width="100%" height="100%" fill="#ffffff"/>"##,
  r##"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-size="16" fill="#888">MarkMap</text>"##,
  "</svg>",
);

/// Keyword of the textual chunk in the canonical placeholder PNG.
pub const PLACEHOLDER_TEXT_KEYWORD: &[u8] = b"description";

/// The images used for new diagrams, and to stand in for degenerate ones.
///
/// Build these once and share them by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
  svg: String,
  png: Vec<u8>,
}
impl Placeholders {
  /// The canonical pair.
  ///
  /// The PNG is a plain white 8-bit RGB image with one `tEXt` chunk between
  /// the header and the image data.
  #[must_use]
  pub fn new() -> Self {
    let Dimension { width, height } = PLACEHOLDER_SIZE;
    let pixels = vec![[0xFF_u8; 3]; (width * height) as usize];
    let texts: Vec<tEXt<'_>> = tEXt::new(PLACEHOLDER_TEXT_KEYWORD, b"MarkMap").into_iter().collect();
    let png = png_encode_rgb8(width, height, &pixels, &texts)
      .expect("the placeholder size and pixel count are fixed and valid");
    Self { svg: PLACEHOLDER_SVG.to_owned(), png }
  }

  /// Custom placeholders.
  ///
  /// The SVG must be well-formed with an `svg` root. The PNG must have a
  /// header and a `tEXt` chunk, since repairs transplant into that chunk.
  pub fn from_parts(svg: impl Into<String>, png: Vec<u8>) -> ImprintResult<Self> {
    let svg = svg.into();
    SvgRoot::parse(&svg)?;
    IHDR::from_png(&png)?;
    if locate_text_chunk(&png)?.is_none() {
      return Err(ContainerError::MissingText.into());
    }
    Ok(Self { svg, png })
  }

  #[inline]
  #[must_use]
  pub fn svg(&self) -> &str {
    &self.svg
  }

  #[inline]
  #[must_use]
  pub fn png(&self) -> &[u8] {
    &self.png
  }

  #[inline]
  #[must_use]
  pub fn bytes(&self, format: ImageFormat) -> &[u8] {
    match format {
      ImageFormat::Svg => self.svg.as_bytes(),
      ImageFormat::Png => &self.png,
    }
  }

  /// The initial content of a brand-new image.
  #[inline]
  #[must_use]
  pub fn payload(&self, format: ImageFormat) -> EncodedPayload {
    EncodedPayload::from_bytes(format, self.bytes(format))
  }
}
impl Default for Placeholders {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}
