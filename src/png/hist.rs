use super::*;

/// `hIST`: Image Histogram
///
/// Gives the approximate usage frequency of each color in the palette.
///
/// * There shall be exactly one entry for each entry in the `PLTE` chunk.
/// * A zero entry specifies that the corresponding palette entry is not used
///   at all in the image.
///
/// Entries are stored as 2-byte big-endian values, use [`iter`](Self::iter).
#[derive(Clone, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct hIST(Bytes);
impl TryFrom<Bytes> for hIST {
  type Error = ParseError;
  #[inline]
  fn try_from(data: Bytes) -> Result<Self, Self::Error> {
    if (data.len() % 2) == 0 {
      Ok(Self(data))
    } else {
      Err(ParseError::BadLength { multiple_of: 2, actual: data.len() })
    }
  }
}
impl KnownChunk for hIST {
  const TAG: ChunkTag = ChunkTag::hIST;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.bytes())
  }
}
impl Debug for hIST {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("hIST").field(&self.iter().take(8).collect::<Vec<_>>()).field(&self.len()).finish()
  }
}
impl hIST {
  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
    let pairs: &[[u8; 2]] = bytemuck::cast_slice(&self.0[..]);
    pairs.iter().copied().map(u16::from_be_bytes)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len() / 2
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}
