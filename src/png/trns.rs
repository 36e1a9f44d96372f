use super::*;

/// `tRNS`: Transparency
///
/// * `Y` and `RGB` each store a single color. All samples of that color in the
///   image are fully transparent, while the rest are fully opaque. The value
///   is always a `u16`, even if the image's bit depth is less than 16.
/// * `Index` has an alpha value for each palette entry. There can be fewer
///   alpha entries than palette entries, missing entries are 255.
///
/// **Note:** The parser picks `Y` or `RGB` based on the data length alone,
/// because the chunk can be claimed without looking at the header. Use
/// [`to_index_alphas`](Self::to_index_alphas) if the image is indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub enum tRNS {
  Y { y: u16 },
  RGB { r: u16, g: u16, b: u16 },
  Index { alphas: Bytes },
}
impl From<Bytes> for tRNS {
  #[inline]
  fn from(data: Bytes) -> Self {
    let single_color = match data[..] {
      [y0, y1] => Some(tRNS::Y { y: u16::from_be_bytes([y0, y1]) }),
      [r0, r1, g0, g1, b0, b1] => Some(tRNS::RGB {
        r: u16::from_be_bytes([r0, r1]),
        g: u16::from_be_bytes([g0, g1]),
        b: u16::from_be_bytes([b0, b1]),
      }),
      _ => None,
    };
    single_color.unwrap_or(tRNS::Index { alphas: data })
  }
}
impl KnownChunk for tRNS {
  const TAG: ChunkTag = ChunkTag::tRNS;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    if raw.data().len() > 256 {
      return Err(ParseError::LengthOutOfRange { min: 0, max: 256, actual: raw.data().len() });
    }
    Ok(Self::from(raw.bytes()))
  }
}
impl tRNS {
  /// The chunk's data read as palette alpha values, whatever variant it is.
  #[must_use]
  pub fn to_index_alphas(&self) -> Vec<u8> {
    match self {
      Self::Y { y } => y.to_be_bytes().to_vec(),
      Self::RGB { r, g, b } => [r.to_be_bytes(), g.to_be_bytes(), b.to_be_bytes()].concat(),
      Self::Index { alphas } => alphas.to_vec(),
    }
  }
}
