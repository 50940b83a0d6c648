use imprint::{
  normalize::{DegeneratePolicy, NormalizeOptions, Normalizer},
  png::{locate_text_chunk, png_encode_rgb8, tEXt, IHDR},
  probe, Dimension, EncodedPayload, ImageFormat, Placeholders, PLACEHOLDER_SIZE,
};

fn png_with_text(size: Dimension, keyword: &[u8], text: &[u8]) -> Vec<u8> {
  let pixels = vec![[0x20_u8, 0x40, 0x80]; (size.width * size.height) as usize];
  png_encode_rgb8(size.width, size.height, &pixels, &[tEXt::new(keyword, text).unwrap()]).unwrap()
}

#[test]
fn test_degenerate_png_end_to_end() {
  let placeholders = Placeholders::new();
  let normalizer = Normalizer::new(&placeholders, NormalizeOptions::default());
  let source = br#"<mxfile><diagram id="x">compressed stuff</diagram></mxfile>"#;
  let degenerate = png_with_text(Dimension::new(1, 1), b"description", source);
  assert_eq!(probe(&degenerate, ImageFormat::Png).unwrap(), Some(Dimension::new(1, 1)));

  let payload = EncodedPayload::from_bytes(ImageFormat::Png, &degenerate);
  let out = normalizer.normalize(&payload).unwrap();
  assert_eq!(out.format(), ImageFormat::Png);
  let out = out.decode().unwrap();

  // the placeholder's header
  let header = IHDR::from_png(&out).unwrap();
  assert_eq!((header.width(), header.height()), (PLACEHOLDER_SIZE.width, PLACEHOLDER_SIZE.height));
  // the payload's text, byte for byte
  let in_span = locate_text_chunk(&degenerate).unwrap().unwrap();
  let out_span = locate_text_chunk(&out).unwrap().unwrap();
  assert_eq!(out_span.slice(&out).unwrap(), in_span.slice(&degenerate).unwrap());
  let text = tEXt::try_from(&out[out_span.start + 8..out_span.end - 4]).unwrap();
  assert_eq!(text.text(), source);
  // everything before and after the text chunk is the placeholder's
  let ph_span = locate_text_chunk(placeholders.png()).unwrap().unwrap();
  assert_eq!(&out[..out_span.start], &placeholders.png()[..ph_span.start]);
  assert_eq!(&out[out_span.end..], &placeholders.png()[ph_span.end..]);

  // normalizing again leaves it alone
  let again = EncodedPayload::from_bytes(ImageFormat::Png, &out);
  assert_eq!(normalizer.normalize(&again).unwrap(), again);
}

#[test]
fn test_policy_boundary() {
  let placeholders = Placeholders::new();
  let normalizer = Normalizer::new(&placeholders, NormalizeOptions::default());
  for (size, repaired) in [
    (Dimension::new(1, 1), true),
    (Dimension::new(2, 1), false),
    (Dimension::new(1, 2), false),
    (Dimension::new(2, 2), false),
  ] {
    let payload = EncodedPayload::from_bytes(ImageFormat::Png, &png_with_text(size, b"k", b"v"));
    let out = normalizer.normalize(&payload).unwrap();
    assert_eq!(out != payload, repaired, "{size:?}");
  }

  let wide = NormalizeOptions {
    degenerate: DegeneratePolicy { max_width: 2, max_height: 2 },
    ..Default::default()
  };
  let payload = EncodedPayload::from_bytes(ImageFormat::Png, &png_with_text(Dimension::new(2, 2), b"k", b"v"));
  let out = Normalizer::new(&placeholders, wide).normalize(&payload).unwrap();
  assert_eq!(probe(&out.decode().unwrap(), ImageFormat::Png).unwrap(), Some(PLACEHOLDER_SIZE));
}

#[test]
fn test_degenerate_png_without_text_is_kept() {
  let placeholders = Placeholders::new();
  let normalizer = Normalizer::new(&placeholders, NormalizeOptions::default());
  let bare = png_encode_rgb8(1, 1, &[[0; 3]], &[]).unwrap();
  let payload = EncodedPayload::from_bytes(ImageFormat::Png, &bare);
  assert_eq!(normalizer.normalize(&payload).unwrap(), payload);
}

#[test]
fn test_random_payloads_never_panic() {
  let placeholders = Placeholders::new();
  let normalizer = Normalizer::new(&placeholders, NormalizeOptions::default());
  for _ in 0..10 {
    let mut png = imprint::png::PNG_SIGNATURE.to_vec();
    png.extend(super::rand_bytes(256));
    let _ = normalizer.normalize(&EncodedPayload::from_bytes(ImageFormat::Png, &png));
    let _ = normalizer.normalize(&EncodedPayload::from_bytes(ImageFormat::Svg, &super::rand_bytes(256)));
  }
}
