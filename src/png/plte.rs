use super::*;

/// `PLTE`: Palette
///
/// Palette entries are always RGB, 1 to 256 of them.
///
/// If you want to have a paletted image with transparency then the transparency
/// info goes in a separate transparency chunk.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PLTE(Bytes);
impl TryFrom<Bytes> for PLTE {
  type Error = ParseError;
  #[inline]
  fn try_from(data: Bytes) -> Result<Self, Self::Error> {
    if (data.len() % 3) != 0 {
      return Err(ParseError::BadLength { multiple_of: 3, actual: data.len() });
    }
    let entries = data.len() / 3;
    if !(1..=256).contains(&entries) {
      return Err(ParseError::LengthOutOfRange { min: 1, max: 256, actual: entries });
    }
    Ok(Self(data))
  }
}
impl KnownChunk for PLTE {
  const TAG: ChunkTag = ChunkTag::PLTE;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.bytes())
  }
}
impl Debug for PLTE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // currently prints no more than 4 palette entries
    let entries = self.entries();
    f.debug_tuple("PLTE").field(&&entries[..entries.len().min(4)]).field(&entries.len()).finish()
  }
}
impl PLTE {
  /// Gets the entries as a slice.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[[u8; 3]] {
    bytemuck::cast_slice(&self.0[..])
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len() / 3
  }

  /// Always false for a parsed palette, there's at least one entry.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

#[test]
fn test_plte_parse() {
  let plte = PLTE::try_from(Bytes::from_static(&[255, 0, 0, 0, 255, 0])).unwrap();
  assert_eq!(plte.entries(), &[[255, 0, 0], [0, 255, 0]]);
  assert_eq!(
    PLTE::try_from(Bytes::from_static(&[1, 2, 3, 4])),
    Err(ParseError::BadLength { multiple_of: 3, actual: 4 })
  );
  assert!(PLTE::try_from(Bytes::new()).is_err());
  assert!(PLTE::try_from(Bytes::from(vec![0_u8; 257 * 3])).is_err());
}
