use imprint::{
  base64_to_bytes, base64_to_text, bytes_to_base64, normalize::rewrite_light_dark, splice, text_to_base64,
  Span,
};
use proptest::prelude::*;

#[test]
fn test_random_bytes_round_trip() {
  for len in [0, 1, 2, 3, 4, 255, 1024] {
    let v = super::rand_bytes(len);
    assert_eq!(base64_to_bytes(&bytes_to_base64(&v)).unwrap(), v);
  }
}

#[test]
fn test_invalid_character_is_decode_error() {
  assert!(base64_to_bytes("iVBO\u{e9}w0K").is_err());
  assert!(base64_to_text("PHN2Zy8+!").is_err());
}

proptest! {
  #[test]
  fn text_round_trip(s in any::<String>()) {
    prop_assert_eq!(base64_to_text(&text_to_base64(&s)).unwrap(), s);
  }

  #[test]
  fn bytes_round_trip(v in proptest::collection::vec(any::<u8>(), 0..512)) {
    prop_assert_eq!(base64_to_bytes(&bytes_to_base64(&v)).unwrap(), v);
  }

  #[test]
  fn light_dark_rewrite_is_idempotent(
    prefix in "[a-z:; ]{0,8}",
    a in "[#a-z0-9]{1,7}|rgb\\([0-9, ]{0,12}\\)",
    b in "[#a-z0-9]{1,7}|rgb\\([0-9, ]{0,12}\\)",
    suffix in "[a-z:; ()]{0,8}",
  ) {
    let css = format!("{prefix}light-dark( {a} , {b} ){suffix}");
    let once = rewrite_light_dark(&css).into_owned();
    let twice = rewrite_light_dark(&once).into_owned();
    prop_assert_eq!(&once, &twice);
    prop_assert!(once.contains(a.as_str()), "{} -> {}", css, once);
  }

  #[test]
  fn splice_lengths(
    dest in proptest::collection::vec(any::<u8>(), 0..64),
    source in proptest::collection::vec(any::<u8>(), 0..64),
    cuts in any::<[usize; 4]>(),
  ) {
    let mut d = [cuts[0] % (dest.len() + 1), cuts[1] % (dest.len() + 1)];
    d.sort_unstable();
    let mut s = [cuts[2] % (source.len() + 1), cuts[3] % (source.len() + 1)];
    s.sort_unstable();
    let out = splice(&dest, Span::new(d[0], d[1]), &source, Span::new(s[0], s[1])).unwrap();
    prop_assert_eq!(out.len(), dest.len() - (d[1] - d[0]) + (s[1] - s[0]));
    prop_assert_eq!(&out[..d[0]], &dest[..d[0]]);
    prop_assert_eq!(&out[d[0]..d[0] + s[1] - s[0]], &source[s[0]..s[1]]);
    prop_assert_eq!(&out[out.len() - (dest.len() - d[1])..], &dest[d[1]..]);
  }
}
