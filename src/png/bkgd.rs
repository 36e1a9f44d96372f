use super::*;

/// `bKGD`: Background colour
///
/// Gives an intended background color for the image.
///
/// RGB and Greyscale colors are always given as `u16` values. The actual color
/// selected should stay within the bit depth range of the rest of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub enum bKGD {
  Y { y: u16 },
  RGB { r: u16, g: u16, b: u16 },
  Index { i: u8 },
}
impl TryFrom<&[u8]> for bKGD {
  type Error = ParseError;
  #[inline]
  fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
    Ok(match *slice {
      [i] => bKGD::Index { i },
      [y0, y1] => bKGD::Y { y: u16::from_be_bytes([y0, y1]) },
      [r0, r1, g0, g1, b0, b1] => bKGD::RGB {
        r: u16::from_be_bytes([r0, r1]),
        g: u16::from_be_bytes([g0, g1]),
        b: u16::from_be_bytes([b0, b1]),
      },
      _ => return Err(ParseError::LengthOutOfRange { min: 1, max: 6, actual: slice.len() }),
    })
  }
}
impl KnownChunk for bKGD {
  const TAG: ChunkTag = ChunkTag::bKGD;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.data())
  }
}

#[test]
fn test_bkgd_parse() {
  assert_eq!(bKGD::try_from(&[3][..]), Ok(bKGD::Index { i: 3 }));
  assert_eq!(bKGD::try_from(&[1, 2][..]), Ok(bKGD::Y { y: 0x0102 }));
  assert_eq!(bKGD::try_from(&[0, 1, 0, 2, 0, 3][..]), Ok(bKGD::RGB { r: 1, g: 2, b: 3 }));
  for len in [0, 3, 7] {
    assert_eq!(
      bKGD::try_from(&vec![0; len][..]),
      Err(ParseError::LengthOutOfRange { min: 1, max: 6, actual: len })
    );
  }
}
