use super::*;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  ///
  /// The palette will have RGB8 data. There may optionally be a transparency
  /// chunk.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl PngColorType {
  /// The number of channels in this type of color.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Y => 1,
      Self::RGB => 3,
      Self::Index => 1,
      Self::YA => 2,
      Self::RGBA => 4,
    }
  }

  /// The bit depths allowed with this color type.
  #[inline]
  #[must_use]
  pub const fn allowed_bit_depths(self) -> &'static [u8] {
    match self {
      Self::Y => &[1, 2, 4, 8, 16],
      Self::Index => &[1, 2, 4, 8],
      Self::RGB | Self::YA | Self::RGBA => &[8, 16],
    }
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = ParseError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(ParseError::InvalidValue { field: "color type", value: u32::from(value) }),
    })
  }
}

/// `IHDR`: Image header
///
/// Must be the first chunk of a PNG, though the claim engine doesn't care
/// where it actually is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels, never 0
  pub width: u32,
  /// height in pixels, never 0
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: PngColorType,
  /// if the image data is stored interlaced.
  ///
  /// please don't make new interlaced images, they're terrible.
  pub is_interlaced: bool,
}
impl IHDR {
  /// You can call this if you must, but it complicates the apparent API to have
  /// it visible because most people don't ever need this.
  #[doc(hidden)]
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(&self) -> usize {
    (self.bit_depth as usize) * self.color_type.channel_count()
  }

  /// The 13 data bytes of this header, as stored in a chunk.
  #[inline]
  #[must_use]
  pub fn to_be_bytes(&self) -> [u8; 13] {
    let [w0, w1, w2, w3] = self.width.to_be_bytes();
    let [h0, h1, h2, h3] = self.height.to_be_bytes();
    [
      w0,
      w1,
      w2,
      w3,
      h0,
      h1,
      h2,
      h3,
      self.bit_depth,
      self.color_type as u8,
      0,
      0,
      u8::from(self.is_interlaced),
    ]
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = ParseError;
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match *value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method] =>
      {
        let width = u32::from_be_bytes([w0, w1, w2, w3]);
        let height = u32::from_be_bytes([h0, h1, h2, h3]);
        if width == 0 || width > ParseConfig::PNG_MAX_CHUNK_LEN {
          return Err(ParseError::InvalidValue { field: "width", value: width });
        }
        if height == 0 || height > ParseConfig::PNG_MAX_CHUNK_LEN {
          return Err(ParseError::InvalidValue { field: "height", value: height });
        }
        let color_type = PngColorType::try_from(color_type)?;
        if !color_type.allowed_bit_depths().contains(&bit_depth) {
          return Err(ParseError::InvalidValue { field: "bit depth", value: u32::from(bit_depth) });
        }
        if compression_method != 0 {
          return Err(ParseError::UnknownCompression(compression_method));
        }
        if filter_method != 0 {
          return Err(ParseError::InvalidValue {
            field: "filter method",
            value: u32::from(filter_method),
          });
        }
        let is_interlaced = match interlace_method {
          0 => false,
          1 => true,
          _ => {
            return Err(ParseError::InvalidValue {
              field: "interlace method",
              value: u32::from(interlace_method),
            })
          }
        };
        Ok(Self { width, height, bit_depth, color_type, is_interlaced })
      }
      _ => Err(ParseError::WrongLength { expected: 13, actual: value.len() }),
    }
  }
}
impl KnownChunk for IHDR {
  const TAG: ChunkTag = ChunkTag::IHDR;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.data())
  }
}
