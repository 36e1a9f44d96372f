//! Error types for parsing PNG chunks.

use std::io;

use crate::ChunkTag;

/// An error from parsing a PNG datastream.
#[derive(Debug, thiserror::Error)]
pub enum PngError {
  /// The data doesn't follow the PNG container structure.
  #[error(transparent)]
  Format(#[from] FormatError),

  /// Reading from the underlying stream failed.
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}

/// A structural problem with the PNG container.
///
/// All of these are fatal: parsing stops and no partial container is given.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
  /// The first 8 bytes aren't the PNG signature.
  #[error("the data doesn't start with the PNG signature")]
  BadSignature,

  /// The stream ended before a complete chunk, or before the `IEND` chunk.
  #[error("the stream ended while reading the {context}")]
  Truncated { context: &'static str },

  /// There's no usable `IHDR` chunk.
  #[error("missing or invalid IHDR chunk")]
  MissingHeader {
    #[source]
    cause: Option<ParseError>,
  },

  /// There were zero `IDAT` chunks.
  #[error("no IDAT chunk present")]
  NoImageData,

  /// There's no `IEND` chunk left to claim.
  #[error("missing IEND chunk")]
  MissingTerminator,

  /// A chunk that the container requires to parse couldn't be parsed.
  #[error("invalid {tag} chunk")]
  InvalidChunk {
    tag: ChunkTag,
    #[source]
    source: ParseError,
  },

  /// A chunk declared a length over the configured limit.
  #[error("{tag} chunk declares {len} bytes, the limit is {limit}")]
  ChunkTooLarge { tag: ChunkTag, len: u32, limit: u32 },

  /// The stream holds more chunks than the configured limit.
  #[error("more than {limit} chunks in the stream")]
  TooManyChunks { limit: usize },

  /// The declared CRC of a chunk doesn't match its contents.
  #[error("{tag} chunk CRC mismatch: declared {declared:#010X}, computed {computed:#010X}")]
  CrcMismatch { tag: ChunkTag, declared: u32, computed: u32 },
}

/// The outcome of a claim that didn't produce a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimError {
  /// No unclaimed chunk with this tag remains.
  ///
  /// This is the normal end of a loop over a repeatable chunk kind, and the
  /// normal "not present" signal for an optional kind.
  #[error("no unclaimed {0} chunk")]
  NotFound(ChunkTag),

  /// A chunk with the tag was found, but the decoder rejected it.
  #[error("couldn't parse {tag} chunk")]
  Parse {
    tag: ChunkTag,
    #[source]
    source: ParseError,
  },
}

/// A chunk's data didn't decode into a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
  /// The chunk must be exactly this many bytes.
  #[error("expected {expected} bytes, found {actual}")]
  WrongLength { expected: usize, actual: usize },

  /// The chunk length must be a multiple of some entry size.
  #[error("length {actual} isn't a multiple of {multiple_of}")]
  BadLength { multiple_of: usize, actual: usize },

  /// The chunk length (or entry count) is outside the allowed range.
  #[error("length {actual} is outside of {min}..={max}")]
  LengthOutOfRange { min: usize, max: usize, actual: usize },

  /// A field holds a value that isn't allowed.
  #[error("invalid {field}: {value}")]
  InvalidValue { field: &'static str, value: u32 },

  /// The null byte after a keyword is missing.
  #[error("missing null separator")]
  MissingSeparator,

  /// Keywords must be 1 to 79 bytes.
  #[error("keyword length {0} is outside of 1..=79")]
  KeywordLength(usize),

  /// Only compression method 0 (zlib) is defined.
  #[error("unknown compression method {0}")]
  UnknownCompression(u8),

  /// The zlib data stream is damaged.
  #[error("couldn't decompress the zlib data")]
  Decompress,

  /// The zlib data stream inflates to more than the allowed size.
  #[error("the zlib data inflates to more than {limit} bytes")]
  DecompressLimit { limit: usize },
}
