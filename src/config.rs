/// What a [`ChunkPool`](crate::png::ChunkPool) does with a chunk that its
/// decoder failed to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParseFailurePolicy {
  /// Leave the chunk in the pool, so that a different decoder could still
  /// claim it later.
  #[default]
  Retain,
  /// Remove the chunk from the pool. The error is still returned.
  Discard,
}

/// Settings for segmenting and assembling a PNG.
///
/// The defaults are lenient: CRC values are not checked, and an ancillary
/// chunk that fails to parse is skipped rather than failing the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseConfig {
  /// Check the CRC of each chunk as it's read.
  pub verify_crc: bool,
  /// The largest chunk data length accepted. Checked before any allocation.
  pub max_chunk_len: u32,
  /// The most chunks accepted in a single datastream.
  pub max_chunks: usize,
  /// How the pool treats chunks that fail to parse.
  pub parse_failure: ParseFailurePolicy,
  /// Fail the parse when an optional ancillary chunk fails to parse.
  pub strict_ancillary: bool,
}

impl ParseConfig {
  /// The PNG spec limits chunk lengths to `2^31 - 1`.
  pub const PNG_MAX_CHUNK_LEN: u32 = (1 << 31) - 1;

  /// The default chunk count limit.
  pub const DEFAULT_MAX_CHUNKS: usize = 1 << 20;

  /// The default config, usable in a const context.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      verify_crc: false,
      max_chunk_len: Self::PNG_MAX_CHUNK_LEN,
      max_chunks: Self::DEFAULT_MAX_CHUNKS,
      parse_failure: ParseFailurePolicy::Retain,
      strict_ancillary: false,
    }
  }

  #[inline]
  #[must_use]
  pub const fn with_verify_crc(mut self, verify_crc: bool) -> Self {
    self.verify_crc = verify_crc;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_max_chunk_len(mut self, max_chunk_len: u32) -> Self {
    self.max_chunk_len = max_chunk_len;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_max_chunks(mut self, max_chunks: usize) -> Self {
    self.max_chunks = max_chunks;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_parse_failure(mut self, parse_failure: ParseFailurePolicy) -> Self {
    self.parse_failure = parse_failure;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_strict_ancillary(mut self, strict_ancillary: bool) -> Self {
    self.strict_ancillary = strict_ancillary;
    self
  }
}

impl Default for ParseConfig {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::new()
  }
}
