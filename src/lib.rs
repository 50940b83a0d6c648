//! A crate to keep diagram source text embedded in PNG and SVG images.
//!
//! Images travel as base64 [data URLs](EncodedPayload). A PNG carries its
//! source in a `tEXt` chunk, and an SVG carries it in a `content` attribute on
//! the root element. This crate reads and moves those around without ever
//! decoding pixels:
//!
//! * [`codec`]: base64 to and from bytes and text.
//! * [`png`]: walking chunks and finding one by type.
//! * [`splice`]: swapping one span of a buffer for a span of another.
//! * [`probe`]: the declared size of an image.
//! * [`normalize`]: making a payload portable, and replacing images too small
//!   to show with a [placeholder](Placeholders) that keeps the source.
//! * [`asset`]: the paths payloads are stored at.
//!
//! ```
//! use imprint::{normalize::*, EncodedPayload, ImageFormat, Placeholders};
//!
//! let placeholders = Placeholders::new();
//! let normalizer = Normalizer::new(&placeholders, NormalizeOptions::default());
//! let svg = EncodedPayload::from_svg_text(
//!   r#"<svg width="20" height="10"><path fill="light-dark(red, blue)"/></svg>"#,
//! );
//! let out = normalizer.normalize(&svg).unwrap();
//! assert_eq!(out.format(), ImageFormat::Svg);
//! assert_eq!(
//!   out.decode().unwrap(),
//!   br#"<svg width="20" height="10"><path fill="red"/></svg>"#
//! );
//! ```

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod int_endian;

mod parser_helpers;

pub mod codec;
pub use codec::*;

mod splice;
pub use splice::*;

pub mod png;

pub mod svg;

mod payload;
pub use payload::*;

mod probe;
pub use probe::*;

mod placeholder;
pub use placeholder::*;

pub mod normalize;

pub mod asset;
