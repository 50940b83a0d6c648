#![forbid(unsafe_code)]

//! Just enough SVG handling to read and rewrite the root element.
//!
//! SVG has no chunk structure, so the only things this crate looks at are the
//! attributes of the outermost `<svg>` element: its size, and the `content`
//! attribute that embedded source text is stored in.

use std::{collections::HashMap, sync::LazyLock};

use quick_xml::{
  escape::resolve_predefined_entity,
  events::{BytesStart, Event},
  Reader, Writer,
};
use regex::Regex;

use crate::ContainerError;

/// A general entity declared in a document's internal DTD subset.
static ENTITY_DECL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"<!ENTITY\s+([A-Za-z_:][\w.:-]*)\s+(?:"([^"]*)"|'([^']*)')\s*>"#)
    .expect("entity declaration pattern is valid")
});

/// The root attribute that embedded source text is stored in.
pub const CONTENT_ATTRIBUTE: &str = "content";

/// The attributes of a document's root `<svg>` element that this crate uses.
///
/// Values are unescaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgRoot {
  pub width: Option<String>,
  pub height: Option<String>,
  pub view_box: Option<String>,
  pub content: Option<String>,
}
impl SvgRoot {
  /// Reads the whole document and collects the root element's attributes.
  ///
  /// The document must be well-formed: a single root element named `svg`, with
  /// every element closed.
  ///
  /// Attribute values can use the predefined XML entities, character
  /// references, and any entity given a literal value in the internal
  /// `<!DOCTYPE ...[ ]>` subset. Other entity references make the document
  /// malformed. External entities are never loaded.
  pub fn parse(svg: &str) -> Result<Self, ContainerError> {
    let mut reader = Reader::from_str(svg);
    let mut root = None;
    let mut depth = 0_usize;
    let mut entities = HashMap::new();
    loop {
      match reader.read_event().map_err(not_svg)? {
        Event::DocType(e) => {
          entities = internal_entities(core::str::from_utf8(&e).map_err(not_svg)?);
        }
        Event::Start(e) => {
          if depth == 0 {
            root = Some(Self::from_root_element(&reader, &e, &entities, root.is_some())?);
          }
          depth += 1;
        }
        Event::Empty(e) if depth == 0 => {
          root = Some(Self::from_root_element(&reader, &e, &entities, root.is_some())?);
        }
        Event::End(_) => depth = depth.saturating_sub(1),
        Event::Eof => break,
        _ => (),
      }
    }
    if depth != 0 {
      return Err(ContainerError::NotSvg("unclosed element".into()));
    }
    root.ok_or_else(|| ContainerError::NotSvg("no root element".into()))
  }

  fn from_root_element(
    reader: &Reader<&[u8]>, e: &BytesStart<'_>, entities: &HashMap<String, String>,
    seen_root: bool,
  ) -> Result<Self, ContainerError> {
    if seen_root {
      return Err(ContainerError::NotSvg("more than one root element".into()));
    }
    if e.local_name().as_ref() != b"svg" {
      let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
      return Err(ContainerError::NotSvg(format!("root element is <{name}>")));
    }
    let mut out = Self::default();
    for attr in e.attributes() {
      let attr = attr.map_err(not_svg)?;
      let slot = match attr.key.as_ref() {
        b"width" => &mut out.width,
        b"height" => &mut out.height,
        b"viewBox" => &mut out.view_box,
        b"content" => &mut out.content,
        _ => continue,
      };
      let value = attr
        .decode_and_unescape_value_with(reader.decoder(), |name| {
          resolve_predefined_entity(name).or_else(|| entities.get(name).map(String::as_str))
        })
        .map_err(not_svg)?;
      *slot = Some(value.into_owned());
    }
    Ok(out)
  }
}

/// Entities declared with a literal value, by name. The first declaration of a
/// name wins.
fn internal_entities(doctype: &str) -> HashMap<String, String> {
  let mut out = HashMap::new();
  for caps in ENTITY_DECL.captures_iter(doctype) {
    let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
    out.entry(caps[1].to_owned()).or_insert_with(|| value.to_owned());
  }
  out
}

/// Gives back the document with `key="value"` set on the root element.
///
/// An existing value for that key is replaced. Every other event in the
/// document is written back out as it was read.
pub fn set_root_attribute(svg: &str, key: &str, value: &str) -> Result<String, ContainerError> {
  let mut reader = Reader::from_str(svg);
  let mut writer = Writer::new(Vec::with_capacity(svg.len() + key.len() + value.len() + 4));
  let mut root_done = false;
  loop {
    let event = match reader.read_event().map_err(not_svg)? {
      Event::Eof => break,
      Event::Start(e) if !root_done => {
        root_done = true;
        Event::Start(with_attribute(&e, key, value)?)
      }
      Event::Empty(e) if !root_done => {
        root_done = true;
        Event::Empty(with_attribute(&e, key, value)?)
      }
      other => other,
    };
    writer.write_event(event).map_err(not_svg)?;
  }
  if !root_done {
    return Err(ContainerError::NotSvg("no root element".into()));
  }
  String::from_utf8(writer.into_inner()).map_err(not_svg)
}

fn with_attribute(
  e: &BytesStart<'_>, key: &str, value: &str,
) -> Result<BytesStart<'static>, ContainerError> {
  let name = core::str::from_utf8(e.name().as_ref()).map_err(not_svg)?.to_owned();
  let mut out = BytesStart::new(name);
  for attr in e.attributes() {
    let attr = attr.map_err(not_svg)?;
    if attr.key.as_ref() != key.as_bytes() {
      out.push_attribute(attr);
    }
  }
  out.push_attribute((key, value));
  Ok(out)
}

#[inline]
fn not_svg(e: impl core::fmt::Display) -> ContainerError {
  ContainerError::NotSvg(e.to_string())
}
