use super::*;

/// `cHRM`: Primary chromaticities and white point
///
/// Values are stored as an integer 100,000 the floating point value.
///
/// **Example:** A value of 0.3127 would be stored as the integer 31270.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub struct cHRM {
  pub white_x: u32,
  pub white_y: u32,
  pub red_x: u32,
  pub red_y: u32,
  pub green_x: u32,
  pub green_y: u32,
  pub blue_x: u32,
  pub blue_y: u32,
}
impl TryFrom<&[u8]> for cHRM {
  type Error = ParseError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    expect_len(data, 4 * 8)?;
    Ok(cHRM {
      white_x: u32_be(&data[0..4]),
      white_y: u32_be(&data[4..8]),
      red_x: u32_be(&data[8..12]),
      red_y: u32_be(&data[12..16]),
      green_x: u32_be(&data[16..20]),
      green_y: u32_be(&data[20..24]),
      blue_x: u32_be(&data[24..28]),
      blue_y: u32_be(&data[28..32]),
    })
  }
}
impl KnownChunk for cHRM {
  const TAG: ChunkTag = ChunkTag::cHRM;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.data())
  }
}
