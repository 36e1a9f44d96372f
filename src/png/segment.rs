use super::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not* PNG
///   data.
#[inline]
#[must_use]
pub const fn is_png_signature_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// Splits a PNG datastream into a pool of raw chunks.
///
/// Reads the signature, then chunks up to and including the first `IEND`.
/// Nothing after `IEND` is read. No chunk data is interpreted, except for
/// the CRC check when [`ParseConfig::verify_crc`] is set.
pub fn segment<R: Read>(mut reader: R, config: &ParseConfig) -> Result<ChunkPool, PngError> {
  let signature: [u8; 8] = match read_byte_array(&mut reader, "signature") {
    Ok(signature) => signature,
    Err(PngError::Format(FormatError::Truncated { .. })) => {
      return Err(FormatError::BadSignature.into())
    }
    Err(e) => return Err(e),
  };
  if signature != PNG_SIGNATURE {
    return Err(FormatError::BadSignature.into());
  }

  let mut pool = ChunkPool::with_policy(config.parse_failure);
  loop {
    if pool.slot_count() >= config.max_chunks {
      return Err(FormatError::TooManyChunks { limit: config.max_chunks }.into());
    }
    let raw = read_chunk(&mut reader, config.max_chunk_len)?;
    if config.verify_crc {
      if let Err(e) = raw.verify_crc() {
        tracing::warn!(tag = %raw.tag(), index = pool.slot_count(), "chunk CRC mismatch");
        return Err(e.into());
      }
    }
    tracing::debug!(tag = %raw.tag(), len = raw.length(), index = pool.slot_count(), "read chunk");
    let is_end = raw.tag() == ChunkTag::IEND;
    pool.push(raw);
    if is_end {
      break;
    }
  }
  tracing::debug!(chunks = pool.slot_count(), "segmented PNG datastream");
  Ok(pool)
}

/// [`segment`] for data that's already in memory.
#[inline]
pub fn segment_bytes(bytes: &[u8], config: &ParseConfig) -> Result<ChunkPool, PngError> {
  segment(bytes, config)
}
