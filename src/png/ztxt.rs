use super::*;

/// `zTXt`: Compressed textual data
///
/// A Latin-1 keyword, and Latin-1 text compressed into a zlib data stream.
#[derive(Clone, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct zTXt {
  keyword: Bytes,
  zlib_data: Bytes,
}
impl TryFrom<Bytes> for zTXt {
  type Error = ParseError;
  #[inline]
  fn try_from(data: Bytes) -> Result<Self, Self::Error> {
    let (keyword, rest) = split_keyword(&data)?;
    let keyword_len = keyword.len();
    match *rest {
      [0, ref zlib_data @ ..] => {
        let zlib_len = zlib_data.len();
        Ok(Self { keyword: data.slice(..keyword_len), zlib_data: data.slice(data.len() - zlib_len..) })
      }
      [method, ..] => Err(ParseError::UnknownCompression(method)),
      [] => Err(ParseError::WrongLength { expected: keyword_len + 2, actual: data.len() }),
    }
  }
}
impl KnownChunk for zTXt {
  const TAG: ChunkTag = ChunkTag::zTXt;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.bytes())
  }
}
impl Debug for zTXt {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("zTXt")
      .field("keyword", &self.keyword())
      .field("zlib_data", &self.zlib_data.len())
      .finish()
  }
}
impl zTXt {
  #[inline]
  #[must_use]
  pub fn keyword_bytes(&self) -> &[u8] {
    &self.keyword
  }

  #[inline]
  #[must_use]
  pub fn keyword(&self) -> String {
    latin1_to_string(&self.keyword)
  }

  /// The still-compressed text.
  #[inline]
  #[must_use]
  pub fn zlib_data(&self) -> &[u8] {
    &self.zlib_data
  }

  /// The most bytes [`decompressed_text`](Self::decompressed_text) will
  /// inflate.
  pub const DEFAULT_TEXT_LIMIT: usize = 8 << 20;

  /// Inflates the text, up to [`DEFAULT_TEXT_LIMIT`](Self::DEFAULT_TEXT_LIMIT)
  /// bytes.
  #[cfg(feature = "miniz_oxide")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
  #[inline]
  pub fn decompressed_text(&self) -> Result<String, ParseError> {
    self.decompressed_text_with_limit(Self::DEFAULT_TEXT_LIMIT)
  }

  /// Inflates the text, failing with [`ParseError::DecompressLimit`] if it
  /// would be more than `limit` bytes.
  #[cfg(feature = "miniz_oxide")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
  pub fn decompressed_text_with_limit(&self, limit: usize) -> Result<String, ParseError> {
    use miniz_oxide::inflate::{decompress_to_vec_zlib_with_limit, TINFLStatus};
    let bytes = decompress_to_vec_zlib_with_limit(&self.zlib_data, limit).map_err(|e| {
      if e.status == TINFLStatus::HasMoreOutput {
        ParseError::DecompressLimit { limit }
      } else {
        ParseError::Decompress
      }
    })?;
    Ok(latin1_to_string(&bytes))
  }
}
