use super::*;

/// `gAMA`: Image gamma
///
/// Values are stored as an integer 100,000 the floating point value.
///
/// **Example:** A gamma of 1/2.2 would be stored as the integer 45,455.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub struct gAMA {
  /// gamma times 100,000
  pub gamma: u32,
}
impl gAMA {
  #[inline]
  #[must_use]
  pub fn to_f32(self) -> f32 {
    self.gamma as f32 / 100_000.0
  }
}
impl TryFrom<&[u8]> for gAMA {
  type Error = ParseError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    expect_len(data, 4)?;
    match u32_be(data) {
      0 => Err(ParseError::InvalidValue { field: "gamma", value: 0 }),
      gamma => Ok(gAMA { gamma }),
    }
  }
}
impl KnownChunk for gAMA {
  const TAG: ChunkTag = ChunkTag::gAMA;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.data())
  }
}
