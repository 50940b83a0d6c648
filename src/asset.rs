#![forbid(unsafe_code)]

//! Where image payloads end up.
//!
//! Images are referenced from documents by asset paths like
//! `assets/<name>.png`, and the bytes are stored at `data/` plus that path.
//! This crate doesn't do any I/O itself, storing goes through an
//! [`AssetStore`].

use std::{collections::HashMap, convert::Infallible, fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::{EncodedPayload, ImageFormat, ImprintError};

static ASSET_IMAGE_PATH: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^assets/.+\.(?:svg|png)$").expect("asset path pattern is valid"));

/// A path to an image asset, `assets/<name>.svg` or `assets/<name>.png`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetPath(String);
impl AssetPath {
  /// Storage paths are this prefix plus the asset path.
  pub const STORAGE_PREFIX: &'static str = "data/";

  /// Recognizes an image asset path. Other paths give `None`.
  #[inline]
  #[must_use]
  pub fn parse(path: &str) -> Option<Self> {
    ASSET_IMAGE_PATH.is_match(path).then(|| Self(path.to_owned()))
  }

  /// The asset path for a newly created image on a diagram node.
  #[inline]
  #[must_use]
  pub fn for_new_image(node_id: impl fmt::Display, format: ImageFormat) -> Self {
    Self(format!("assets/markmap-image-{node_id}.{}", format.extension()))
  }

  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Taken from the extension.
  #[inline]
  #[must_use]
  pub fn format(&self) -> ImageFormat {
    if self.0.ends_with(".png") {
      ImageFormat::Png
    } else {
      ImageFormat::Svg
    }
  }

  /// The last path segment.
  #[inline]
  #[must_use]
  pub fn file_name(&self) -> &str {
    self.0.rsplit('/').next().unwrap_or(&self.0)
  }

  #[inline]
  #[must_use]
  pub fn storage_path(&self) -> String {
    format!("{}{}", Self::STORAGE_PREFIX, self.0)
  }
}
impl fmt::Display for AssetPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Something that can keep files by path.
pub trait AssetStore {
  type Error;
  fn put_file(&mut self, path: &str, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// An in-memory store, keyed by storage path.
impl AssetStore for HashMap<String, Vec<u8>> {
  type Error = Infallible;
  #[inline]
  fn put_file(&mut self, path: &str, bytes: &[u8]) -> Result<(), Self::Error> {
    self.insert(path.to_owned(), bytes.to_vec());
    Ok(())
  }
}

/// Failure to store a payload.
#[derive(Debug, Error)]
pub enum StoreError<E> {
  /// The payload didn't decode to a valid image.
  #[error(transparent)]
  Payload(#[from] ImprintError),

  /// The payload's format isn't the one the asset path names.
  #[error("asset `{asset}` can't hold a {payload} payload")]
  FormatMismatch { asset: AssetPath, payload: ImageFormat },

  /// The store itself failed.
  #[error("failed to store `{path}`")]
  Store {
    path: String,
    #[source]
    source: E,
  },
}

/// Decodes a payload and saves the bytes at the asset's storage path.
///
/// Gives back the storage path that was written.
pub fn store_payload<S: AssetStore>(
  store: &mut S, asset: &AssetPath, payload: &EncodedPayload,
) -> Result<String, StoreError<S::Error>> {
  if asset.format() != payload.format() {
    return Err(StoreError::FormatMismatch { asset: asset.clone(), payload: payload.format() });
  }
  let bytes = payload.decode()?;
  let path = asset.storage_path();
  log::debug!("storing {} bytes at {path}", bytes.len());
  match store.put_file(&path, &bytes) {
    Ok(()) => Ok(path),
    Err(source) => Err(StoreError::Store { path, source }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Placeholders;

  #[test]
  fn test_asset_path_parse() {
    let a = AssetPath::parse("assets/diagram 1.png").unwrap();
    assert_eq!(a.format(), ImageFormat::Png);
    assert_eq!(a.file_name(), "diagram 1.png");
    assert_eq!(a.storage_path(), "data/assets/diagram 1.png");

    let a = AssetPath::parse("assets/sub/dir/x.svg").unwrap();
    assert_eq!(a.format(), ImageFormat::Svg);
    assert_eq!(a.file_name(), "x.svg");

    for not_asset in ["assets/.png", "assets/x.jpg", "data/assets/x.png", "assets/x.PNG", "x.svg", "assets/x.svg/"] {
      assert_eq!(AssetPath::parse(not_asset), None, "{not_asset}");
    }
  }

  #[test]
  fn test_for_new_image() {
    let a = AssetPath::for_new_image("n42", ImageFormat::Svg);
    assert_eq!(a.as_str(), "assets/markmap-image-n42.svg");
    assert_eq!(AssetPath::parse(a.as_str()), Some(a));
  }

  #[test]
  fn test_store_payload() {
    let placeholders = Placeholders::new();
    let mut store: HashMap<String, Vec<u8>> = HashMap::new();
    let asset = AssetPath::for_new_image(7, ImageFormat::Png);
    let path = store_payload(&mut store, &asset, &placeholders.payload(ImageFormat::Png)).unwrap();
    assert_eq!(path, "data/assets/markmap-image-7.png");
    assert_eq!(store[&path], placeholders.png());

    let err = store_payload(&mut store, &asset, &placeholders.payload(ImageFormat::Svg)).unwrap_err();
    assert!(matches!(err, StoreError::FormatMismatch { payload: ImageFormat::Svg, .. }));

    let bad = EncodedPayload::new(ImageFormat::Png, "!!");
    assert!(matches!(store_payload(&mut store, &asset, &bad), Err(StoreError::Payload(_))));
    assert_eq!(store.len(), 1);
  }

  struct ReadOnly;
  impl AssetStore for ReadOnly {
    type Error = &'static str;
    fn put_file(&mut self, _path: &str, _bytes: &[u8]) -> Result<(), Self::Error> {
      Err("read only")
    }
  }

  #[test]
  fn test_store_failure() {
    let asset = AssetPath::parse("assets/a.svg").unwrap();
    let err = store_payload(&mut ReadOnly, &asset, &EncodedPayload::from_svg_text("<svg/>")).unwrap_err();
    match err {
      StoreError::Store { path, source } => {
        assert_eq!(path, "data/assets/a.svg");
        assert_eq!(source, "read only");
      }
      other => panic!("{other:?}"),
    }
  }
}
