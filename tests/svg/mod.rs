use std::{borrow::Cow, path::Path};

use imprint::{
  normalize::{rewrite_light_dark, NormalizeOptions, Normalizer},
  probe,
  svg::SvgRoot,
  Dimension, EncodedPayload, ImageFormat, Placeholders, PLACEHOLDER_SIZE,
};
use walkdir::WalkDir;

fn fixtures() -> Vec<(String, String)> {
  let mut out: Vec<(String, String)> = WalkDir::new("tests/svg/")
    .into_iter()
    .filter_map(|e| e.ok())
    .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
    .map(|e| {
      let name = e.path().file_name().unwrap().to_string_lossy().into_owned();
      (name, std::fs::read_to_string(e.path()).unwrap())
    })
    .collect();
  out.sort();
  out
}

fn expected_size(name: &str) -> Option<Dimension> {
  Some(match Path::new(name).file_stem()?.to_str()? {
    "plain" => Dimension::new(120, 80),
    "view_box" => Dimension::new(64, 32),
    "light_dark" => Dimension::new(200, 100),
    "degenerate" => Dimension::new(1, 1),
    _ => return None,
  })
}

#[test]
fn test_fixtures_probe() {
  let fixtures = fixtures();
  assert!(fixtures.len() >= 4);
  for (name, text) in &fixtures {
    SvgRoot::parse(text).unwrap_or_else(|e| panic!("{name}: {e}"));
    let size = probe(text.as_bytes(), ImageFormat::Svg).unwrap();
    if let Some(expected) = expected_size(name) {
      assert_eq!(size, Some(expected), "{name}");
    }
  }
}

#[test]
fn test_fixtures_rewrite_is_idempotent() {
  for (name, text) in fixtures() {
    let once = rewrite_light_dark(&text);
    assert!(!once.to_ascii_lowercase().contains("light-dark("), "{name}: {once}");
    assert!(matches!(rewrite_light_dark(&once), Cow::Borrowed(_)), "{name}");
  }
}

#[test]
fn test_fixtures_normalize() {
  let placeholders = Placeholders::new();
  let normalizer = Normalizer::new(&placeholders, NormalizeOptions::default());
  for (name, text) in fixtures() {
    let payload = EncodedPayload::from_svg_text(&text);
    let out = normalizer.normalize(&payload).unwrap();
    let out_text = String::from_utf8(out.decode().unwrap()).unwrap();
    match name.as_str() {
      "light_dark.svg" => {
        assert!(out_text.contains(".node { fill: #ffffff; stroke: rgb(0, 0, 0); }"), "{out_text}");
        assert!(out_text.contains("stroke: var(--edge, #999);"), "{out_text}");
      }
      "degenerate.svg" => {
        assert_eq!(probe(out_text.as_bytes(), ImageFormat::Svg).unwrap(), Some(PLACEHOLDER_SIZE));
        let root = SvgRoot::parse(&out_text).unwrap();
        assert_eq!(root.content.as_deref(), Some(r#"<mxfile host="embed"><diagram/></mxfile>"#));
      }
      "plain.svg" | "view_box.svg" => assert_eq!(out, payload, "{name}"),
      _ => (),
    }
  }
}
