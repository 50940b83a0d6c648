use crate::{
  png::locate_text_chunk,
  splice,
  svg::{set_root_attribute, SvgRoot, CONTENT_ATTRIBUTE},
  ImprintResult,
};

/// Moves a PNG's textual chunk into the placeholder PNG.
///
/// The output is the placeholder image with its own `tEXt` chunk swapped out
/// for the first `tEXt` chunk of `png`, copied byte for byte (CRC included).
/// So the header reports the placeholder's size while the embedded text is the
/// payload's.
///
/// `Ok(None)` when either image has no `tEXt` chunk.
pub fn repair_png(png: &[u8], placeholder_png: &[u8]) -> ImprintResult<Option<Vec<u8>>> {
  let Some(payload_span) = locate_text_chunk(png)? else {
    return Ok(None);
  };
  let Some(placeholder_span) = locate_text_chunk(placeholder_png)? else {
    return Ok(None);
  };
  Ok(Some(splice(placeholder_png, placeholder_span, png, payload_span)?))
}

/// Moves an SVG's embedded source onto the placeholder SVG.
///
/// The output is the placeholder document with the `content` attribute of
/// `svg`'s root set on its own root.
///
/// `Ok(None)` when `svg` has no `content` attribute.
pub fn repair_svg(svg: &str, placeholder_svg: &str) -> ImprintResult<Option<String>> {
  let Some(content) = SvgRoot::parse(svg)?.content else {
    return Ok(None);
  };
  Ok(Some(set_root_attribute(placeholder_svg, CONTENT_ATTRIBUTE, &content)?))
}
