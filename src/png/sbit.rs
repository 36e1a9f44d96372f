use super::*;

/// `sBIT`: Significant bits
///
/// Gives the original number of significant bits per channel in the image.
///
/// * Each value here should be more than 0 and no more than the full bit depth
///   of this PNG.
/// * Indexed color uses the `RGB` variant, and the values must be 8 or less.
/// * The variant used should match the color type of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub enum sBIT {
  Y { y: u8 },
  YA { y: u8, a: u8 },
  RGB { r: u8, g: u8, b: u8 },
  RGBA { r: u8, g: u8, b: u8, a: u8 },
}
impl TryFrom<&[u8]> for sBIT {
  type Error = ParseError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    if let Some(bits) = data.iter().copied().find(|bits| !(1..=16).contains(bits)) {
      return Err(ParseError::InvalidValue { field: "significant bits", value: u32::from(bits) });
    }
    Ok(match *data {
      [y] => sBIT::Y { y },
      [y, a] => sBIT::YA { y, a },
      [r, g, b] => sBIT::RGB { r, g, b },
      [r, g, b, a] => sBIT::RGBA { r, g, b, a },
      _ => return Err(ParseError::LengthOutOfRange { min: 1, max: 4, actual: data.len() }),
    })
  }
}
impl KnownChunk for sBIT {
  const TAG: ChunkTag = ChunkTag::sBIT;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.data())
  }
}
