use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// `light-dark(A, B)` with the first argument captured.
///
/// An argument is any run of characters without parens or commas, mixed with
/// `name(...)` calls that have no parens of their own inside. So one level of
/// nesting works, like `light-dark(rgb(0, 0, 0), white)`, and deeper nesting
/// doesn't match at all.
static LIGHT_DARK: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)light-dark\s*\(\s*((?:[^(),]|\w+\([^)]*\))+?)\s*,\s*(?:[^(),]|\w+\([^)]*\))+?\s*\)")
    .expect("light-dark pattern is valid")
});

/// Replaces every `light-dark(A, B)` in the text with just `A`.
///
/// Renderers that don't understand `light-dark()` drop the whole declaration,
/// so the light value is kept. The function name is matched without regard to
/// case, and whitespace around the parens and comma is allowed.
///
/// A call nested directly inside another call's first argument is rewritten
/// too, so the output never has a match left and a second pass changes nothing.
///
/// Gives back the input borrowed when nothing matched.
#[must_use]
pub fn rewrite_light_dark(css: &str) -> Cow<'_, str> {
  let mut out = match LIGHT_DARK.replace_all(css, "$1") {
    Cow::Borrowed(_) => return Cow::Borrowed(css),
    Cow::Owned(s) => s,
  };
  loop {
    let next = match LIGHT_DARK.replace_all(&out, "$1") {
      Cow::Borrowed(_) => break,
      Cow::Owned(s) => s,
    };
    out = next;
  }
  Cow::Owned(out)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rewrite_light_dark() {
    assert_eq!(rewrite_light_dark("fill: light-dark(#000, #fff)"), "fill: #000");
    assert_eq!(rewrite_light_dark("fill:LIGHT-DARK ( red ,  blue )"), "fill:red");
    assert_eq!(
      rewrite_light_dark("color: light-dark(rgb(0, 0, 0), rgba(255,255,255,0.5)); x: light-dark(a,b)"),
      "color: rgb(0, 0, 0); x: a"
    );
    assert_eq!(rewrite_light_dark("stroke: var(--x, light-dark(#111, #eee))"), "stroke: var(--x, #111)");
  }

  #[test]
  fn test_rewrite_leaves_other_text_alone() {
    let css = "fill: #000; light-dark; light-dark(a)";
    assert!(matches!(rewrite_light_dark(css), Cow::Borrowed(_)));
    assert!(matches!(rewrite_light_dark(""), Cow::Borrowed(_)));
  }

  #[test]
  fn test_rewrite_nested_first_argument() {
    let once = rewrite_light_dark("c: light-dark(light-dark(a, b), c)");
    assert_eq!(once, "c: a");
    assert!(matches!(rewrite_light_dark(&once), Cow::Borrowed(_)));
  }
}
