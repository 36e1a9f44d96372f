use super::*;

/// `IDAT`: Image data.
///
/// * Image data is stored with Zlib compression applied.
/// * Images can have more than one IDAT chunk. They should all be stored in a
///   row. Multiple chunks are treated as a single Zlib datastream.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IDAT(Bytes);
impl From<Bytes> for IDAT {
  #[inline]
  #[must_use]
  fn from(data: Bytes) -> Self {
    Self(data)
  }
}
impl KnownChunk for IDAT {
  const TAG: ChunkTag = ChunkTag::IDAT;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Ok(Self::from(raw.bytes()))
  }
}
impl Debug for IDAT {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("IDAT").field(&&self.0[..self.0.len().min(12)]).field(&self.0.len()).finish()
  }
}
impl IDAT {
  /// The compressed bytes of this chunk.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  #[inline]
  #[must_use]
  pub fn into_bytes(self) -> Bytes {
    self.0
  }
}
