use super::*;

/// Textual data
///
/// A keyword and a text string, separated by a single null byte. Both parts are
/// Latin-1 encoded, and the keyword should be 1-79 bytes.
///
/// Spec: [tEXt](https://www.w3.org/TR/png/#11tEXt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct tEXt<'b> {
  keyword: &'b [u8],
  text: &'b [u8],
}
impl<'b> tEXt<'b> {
  /// Checks the keyword before making the value.
  ///
  /// The keyword must be 1-79 bytes with no null byte. The text can't contain
  /// a null byte either.
  #[inline]
  #[must_use]
  pub fn new(keyword: &'b [u8], text: &'b [u8]) -> Option<Self> {
    let keyword_ok = (1..=79).contains(&keyword.len()) && !keyword.contains(&0);
    if keyword_ok && !text.contains(&0) {
      Some(Self { keyword, text })
    } else {
      None
    }
  }
  #[inline]
  #[must_use]
  pub const fn keyword(&self) -> &'b [u8] {
    self.keyword
  }
  #[inline]
  #[must_use]
  pub const fn text(&self) -> &'b [u8] {
    self.text
  }
  /// The keyword as a string, decoding Latin-1.
  #[inline]
  #[must_use]
  pub fn keyword_string(&self) -> String {
    latin1_to_string(self.keyword)
  }
  /// The text as a string, decoding Latin-1.
  #[inline]
  #[must_use]
  pub fn text_string(&self) -> String {
    latin1_to_string(self.text)
  }
  /// Chunk data for this value: keyword, null, text.
  #[must_use]
  pub fn to_data(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.keyword.len() + 1 + self.text.len());
    out.extend_from_slice(self.keyword);
    out.push(0);
    out.extend_from_slice(self.text);
    out
  }
}
impl<'b> TryFrom<&'b [u8]> for tEXt<'b> {
  type Error = ();
  #[inline]
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let mut it = data.splitn(2, |u| u == &0_u8);
    let keyword = it.next().ok_or(())?;
    let text = it.next().ok_or(())?;
    Ok(Self { keyword, text })
  }
}
impl<'b> TryFrom<RawChunk<'b>> for tEXt<'b> {
  type Error = ();
  #[inline]
  fn try_from(raw: RawChunk<'b>) -> Result<Self, Self::Error> {
    if raw.ty() == ChunkTy::tEXt {
      Self::try_from(raw.data())
    } else {
      Err(())
    }
  }
}

#[inline]
fn latin1_to_string(bytes: &[u8]) -> String {
  bytes.iter().map(|&b| char::from(b)).collect()
}
