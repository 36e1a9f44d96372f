use std::io;

use super::*;

/// An unparsed chunk from a PNG.
///
/// The data is a [`Bytes`] buffer, so decoders that keep the chunk data can
/// take it without copying.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RawChunk {
  tag: ChunkTag,
  data: Bytes,
  declared_crc: u32,
}
impl Debug for RawChunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawChunk")
      .field("tag", &self.tag)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl RawChunk {
  /// Makes a chunk with a correct CRC for the tag and data given.
  ///
  /// ## Panics
  /// * If the data is longer than `u32::MAX` bytes.
  #[inline]
  #[must_use]
  pub fn new(tag: ChunkTag, data: impl Into<Bytes>) -> Self {
    let data: Bytes = data.into();
    assert!(u32::try_from(data.len()).is_ok(), "chunk data too long");
    let declared_crc = chunk_crc(tag, &data);
    Self { tag, data, declared_crc }
  }

  /// Makes a chunk with whatever CRC value you like.
  ///
  /// ## Panics
  /// * If the data is longer than `u32::MAX` bytes.
  #[inline]
  #[must_use]
  pub fn with_declared_crc(tag: ChunkTag, data: impl Into<Bytes>, declared_crc: u32) -> Self {
    let data: Bytes = data.into();
    assert!(u32::try_from(data.len()).is_ok(), "chunk data too long");
    Self { tag, data, declared_crc }
  }

  #[inline]
  #[must_use]
  pub const fn tag(&self) -> ChunkTag {
    self.tag
  }

  /// The length of the data, as written on the wire.
  #[inline]
  #[must_use]
  pub fn length(&self) -> u32 {
    self.data.len() as u32
  }

  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }

  /// A shared handle to the data.
  #[inline]
  #[must_use]
  pub fn bytes(&self) -> Bytes {
    self.data.clone()
  }

  /// The CRC value stored in the stream. This is *not* checked when reading.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }

  /// Computes the CRC that the tag and data actually have.
  #[inline]
  #[must_use]
  pub fn computed_crc(&self) -> u32 {
    chunk_crc(self.tag, &self.data)
  }

  #[inline]
  #[must_use]
  pub fn crc_matches(&self) -> bool {
    self.declared_crc == self.computed_crc()
  }

  /// Checks the CRC, giving a [`FormatError::CrcMismatch`] on failure.
  #[inline]
  pub fn verify_crc(&self) -> Result<(), FormatError> {
    let computed = self.computed_crc();
    if self.declared_crc == computed {
      Ok(())
    } else {
      Err(FormatError::CrcMismatch { tag: self.tag, declared: self.declared_crc, computed })
    }
  }

  /// Writes the chunk in wire format: length, tag, data, CRC.
  pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
    writer.write_all(&self.length().to_be_bytes())?;
    writer.write_all(&self.tag.0)?;
    writer.write_all(&self.data)?;
    writer.write_all(&self.declared_crc.to_be_bytes())
  }
}

#[inline]
fn chunk_crc(tag: ChunkTag, data: &[u8]) -> u32 {
  png_crc(tag.0.iter().copied().chain(data.iter().copied()))
}

/// Reads one chunk from the stream.
///
/// A stream that ends partway through any of the four chunk fields gives
/// [`FormatError::Truncated`]. A declared length over `max_len` gives
/// [`FormatError::ChunkTooLarge`] before the data is read. The CRC is
/// captured but not checked.
pub fn read_chunk<R: Read>(reader: &mut R, max_len: u32) -> Result<RawChunk, PngError> {
  let len = u32::from_be_bytes(read_byte_array(reader, "chunk length")?);
  let tag = ChunkTag(read_byte_array(reader, "chunk tag")?);
  if len > max_len {
    return Err(FormatError::ChunkTooLarge { tag, len, limit: max_len }.into());
  }
  let data = read_byte_vec(reader, len, "chunk data")?;
  let declared_crc = u32::from_be_bytes(read_byte_array(reader, "chunk CRC")?);
  Ok(RawChunk { tag, data: Bytes::from(data), declared_crc })
}

/// Writes the PNG signature followed by each chunk.
///
/// Nothing checks that the chunks make sense as a PNG.
pub fn write_png_chunks<'c, W: io::Write>(
  writer: &mut W, chunks: impl IntoIterator<Item = &'c RawChunk>,
) -> io::Result<()> {
  writer.write_all(&PNG_SIGNATURE)?;
  for chunk in chunks {
    chunk.write_to(writer)?;
  }
  Ok(())
}
