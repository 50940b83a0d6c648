#![forbid(unsafe_code)]

use core::{fmt, str::FromStr};

use crate::{
  codec::{base64_to_bytes, bytes_to_base64, text_to_base64},
  png::is_png_signature_correct,
  svg::SvgRoot,
  ContainerError, DecodeError, ImprintResult,
};

/// The two image formats that can carry an embedded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageFormat {
  Svg,
  Png,
}
impl ImageFormat {
  #[inline]
  #[must_use]
  pub const fn mime(self) -> &'static str {
    match self {
      Self::Svg => "image/svg+xml",
      Self::Png => "image/png",
    }
  }

  #[inline]
  #[must_use]
  pub const fn extension(self) -> &'static str {
    match self {
      Self::Svg => "svg",
      Self::Png => "png",
    }
  }

  /// Mime types compare case-insensitively.
  #[inline]
  #[must_use]
  pub fn from_mime(mime: &str) -> Option<Self> {
    [Self::Svg, Self::Png].into_iter().find(|f| f.mime().eq_ignore_ascii_case(mime.trim()))
  }

  #[inline]
  #[must_use]
  pub fn from_extension(ext: &str) -> Option<Self> {
    [Self::Svg, Self::Png].into_iter().find(|f| f.extension().eq_ignore_ascii_case(ext))
  }

  /// Checks that decoded bytes really are this format.
  ///
  /// * PNG: the 8 byte signature.
  /// * SVG: UTF-8 text that's a well-formed document with an `svg` root.
  pub fn check_bytes(self, bytes: &[u8]) -> ImprintResult<()> {
    match self {
      Self::Png if is_png_signature_correct(bytes) => Ok(()),
      Self::Png => Err(ContainerError::NoSignature.into()),
      Self::Svg => {
        SvgRoot::parse(core::str::from_utf8(bytes)?)?;
        Ok(())
      }
    }
  }
}
impl fmt::Display for ImageFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.extension())
  }
}

/// An image as a base64 body plus the format it claims to be.
///
/// This is the `data:<mime>;base64,<body>` form that images travel in. Making
/// one doesn't check anything, the body is only validated by
/// [`decode`](Self::decode).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedPayload {
  format: ImageFormat,
  body: String,
}
impl EncodedPayload {
  #[inline]
  #[must_use]
  pub fn new(format: ImageFormat, body: impl Into<String>) -> Self {
    Self { format, body: body.into() }
  }

  #[inline]
  #[must_use]
  pub fn from_bytes(format: ImageFormat, bytes: &[u8]) -> Self {
    Self { format, body: bytes_to_base64(bytes) }
  }

  /// Wraps SVG source text, encoding it through UTF-8.
  #[inline]
  #[must_use]
  pub fn from_svg_text(svg: &str) -> Self {
    Self { format: ImageFormat::Svg, body: text_to_base64(svg) }
  }

  /// Parses a `data:` URL.
  ///
  /// Extra parameters between the mime type and `;base64` (such as a charset)
  /// are allowed and dropped.
  pub fn parse(data_url: &str) -> Result<Self, DecodeError> {
    let rest = data_url.trim_start().strip_prefix("data:").ok_or(DecodeError::NotDataUrl)?;
    let (meta, body) = rest.split_once(',').ok_or(DecodeError::NotBase64DataUrl)?;
    let mut params = meta.split(';');
    let mime = params.next().unwrap_or_default().trim();
    if !params.last().is_some_and(|p| p.trim().eq_ignore_ascii_case("base64")) {
      return Err(DecodeError::NotBase64DataUrl);
    }
    let format = ImageFormat::from_mime(mime).ok_or_else(|| DecodeError::UnknownMime(mime.to_owned()))?;
    Ok(Self { format, body: body.trim().to_owned() })
  }

  #[inline]
  #[must_use]
  pub const fn format(&self) -> ImageFormat {
    self.format
  }

  #[inline]
  #[must_use]
  pub fn body(&self) -> &str {
    &self.body
  }

  #[inline]
  #[must_use]
  pub fn to_data_url(&self) -> String {
    self.to_string()
  }

  /// Decodes the body and checks it against the declared format.
  ///
  /// Bad base64 is a decode error, while bytes of the wrong shape are a
  /// malformed container.
  pub fn decode(&self) -> ImprintResult<Vec<u8>> {
    let bytes = base64_to_bytes(&self.body)?;
    self.format.check_bytes(&bytes)?;
    Ok(bytes)
  }
}
impl fmt::Display for EncodedPayload {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "data:{};base64,{}", self.format.mime(), self.body)
  }
}
impl FromStr for EncodedPayload {
  type Err = DecodeError;
  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}
