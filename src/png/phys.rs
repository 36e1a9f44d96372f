use super::*;

/// `pHYs`: Physical pixel dimensions
///
/// Specifies the intended pixel size or aspect ratio for display of the image.
///
/// When `is_meters` is set then `x` and `y` are in pixels per meter.
/// Otherwise they have no unit and define an aspect ratio only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub struct pHYs {
  pub ppu_x: u32,
  pub ppu_y: u32,
  pub is_meters: bool,
}
impl TryFrom<&[u8]> for pHYs {
  type Error = ParseError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    expect_len(data, 9)?;
    let is_meters = match data[8] {
      0 => false,
      1 => true,
      unit => return Err(ParseError::InvalidValue { field: "pHYs unit", value: u32::from(unit) }),
    };
    Ok(pHYs { ppu_x: u32_be(&data[0..4]), ppu_y: u32_be(&data[4..8]), is_meters })
  }
}
impl KnownChunk for pHYs {
  const TAG: ChunkTag = ChunkTag::pHYs;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.data())
  }
}
