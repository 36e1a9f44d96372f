use super::*;

/// `IEND`: Image trailer
///
/// Always the last chunk, and always empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IEND;
impl TryFrom<&[u8]> for IEND {
  type Error = ParseError;
  #[inline]
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    expect_len(value, 0).map(|()| IEND)
  }
}
impl KnownChunk for IEND {
  const TAG: ChunkTag = ChunkTag::IEND;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.data())
  }
}
