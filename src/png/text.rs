use super::*;

/// `tEXt`: Textual data
///
/// A keyword and a text string, both Latin-1. A PNG can have any number of
/// these.
#[derive(Clone, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct tEXt {
  keyword: Bytes,
  text: Bytes,
}
impl TryFrom<Bytes> for tEXt {
  type Error = ParseError;
  #[inline]
  fn try_from(data: Bytes) -> Result<Self, Self::Error> {
    let (keyword, text) = split_keyword(&data)?;
    let keyword_len = keyword.len();
    let text_len = text.len();
    Ok(Self {
      keyword: data.slice(..keyword_len),
      text: data.slice(data.len() - text_len..),
    })
  }
}
impl KnownChunk for tEXt {
  const TAG: ChunkTag = ChunkTag::tEXt;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.bytes())
  }
}
impl Debug for tEXt {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("tEXt").field("keyword", &self.keyword()).field("text", &self.text()).finish()
  }
}
impl tEXt {
  /// Raw keyword bytes, 1 to 79 of them.
  #[inline]
  #[must_use]
  pub fn keyword_bytes(&self) -> &[u8] {
    &self.keyword
  }

  /// Raw text bytes. Can be empty.
  #[inline]
  #[must_use]
  pub fn text_bytes(&self) -> &[u8] {
    &self.text
  }

  #[inline]
  #[must_use]
  pub fn keyword(&self) -> String {
    latin1_to_string(&self.keyword)
  }

  #[inline]
  #[must_use]
  pub fn text(&self) -> String {
    latin1_to_string(&self.text)
  }
}

#[test]
fn test_text_parse() {
  let t = tEXt::try_from(Bytes::from_static(b"Author\0Caf\xE9 owner")).unwrap();
  assert_eq!(t.keyword(), "Author");
  assert_eq!(t.text(), "Caf\u{e9} owner");
  // only the first null splits
  let t = tEXt::try_from(Bytes::from_static(b"k\0a\0b")).unwrap();
  assert_eq!(t.text_bytes(), b"a\0b");
  assert!(tEXt::try_from(Bytes::from_static(b"k\0")).unwrap().text_bytes().is_empty());

  assert_eq!(tEXt::try_from(Bytes::from_static(b"no separator")), Err(ParseError::MissingSeparator));
  assert_eq!(tEXt::try_from(Bytes::from_static(b"\0text")), Err(ParseError::KeywordLength(0)));
  assert_eq!(tEXt::try_from(Bytes::from(vec![b'k'; 80])), Err(ParseError::MissingSeparator));
  let mut long = vec![b'k'; 80];
  long.push(0);
  assert_eq!(tEXt::try_from(Bytes::from(long)), Err(ParseError::KeywordLength(80)));
}
