use core::fmt::Write;

/// The 4-byte code naming the kind of a PNG chunk.
///
/// Tags compare by exact bytes. Each byte is expected to be an ASCII letter,
/// but nothing enforces that: the `Debug` and `Display` impls just `as` cast
/// each byte into a character, which is still safe for non-ascii data.
///
/// The case of each letter carries a property bit (bit 5 of the byte), see
/// the `is_` methods.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTag(pub [u8; 4]);

#[allow(nonstandard_style)]
impl ChunkTag {
  /// Image header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Palette
  pub const PLTE: Self = Self(*b"PLTE");
  /// Image data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image trailer
  pub const IEND: Self = Self(*b"IEND");
  /// Background colour
  pub const bKGD: Self = Self(*b"bKGD");
  /// Primary chromaticities and white point
  pub const cHRM: Self = Self(*b"cHRM");
  /// Image gamma
  pub const gAMA: Self = Self(*b"gAMA");
  /// Image histogram
  pub const hIST: Self = Self(*b"hIST");
  /// Physical pixel dimensions
  pub const pHYs: Self = Self(*b"pHYs");
  /// Significant bits
  pub const sBIT: Self = Self(*b"sBIT");
  /// Transparency
  pub const tRNS: Self = Self(*b"tRNS");
  /// Image last-modification time
  pub const tIME: Self = Self(*b"tIME");
  /// Textual data
  pub const tEXt: Self = Self(*b"tEXt");
  /// Compressed textual data
  pub const zTXt: Self = Self(*b"zTXt");
}

impl ChunkTag {
  const PROPERTY_BIT: u8 = 0x20;

  /// Gets the raw tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// If the tag is made of four ASCII letters, as all PNG tags must be.
  #[inline]
  #[must_use]
  pub const fn is_valid(self) -> bool {
    self.0[0].is_ascii_alphabetic()
      && self.0[1].is_ascii_alphabetic()
      && self.0[2].is_ascii_alphabetic()
      && self.0[3].is_ascii_alphabetic()
  }

  /// Ancillary chunks (lowercase first letter) can be ignored by a decoder.
  #[inline]
  #[must_use]
  pub const fn is_ancillary(self) -> bool {
    (self.0[0] & Self::PROPERTY_BIT) != 0
  }

  /// Critical chunks (uppercase first letter) are needed to show the image.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    !self.is_ancillary()
  }

  /// Private chunks (lowercase second letter) aren't part of the public
  /// registry of chunk kinds.
  #[inline]
  #[must_use]
  pub const fn is_private(self) -> bool {
    (self.0[1] & Self::PROPERTY_BIT) != 0
  }

  /// The third letter must currently be uppercase.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_set(self) -> bool {
    (self.0[2] & Self::PROPERTY_BIT) != 0
  }

  /// Safe-to-copy chunks (lowercase fourth letter) can be copied by an editor
  /// that doesn't understand them, even after critical chunks are modified.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & Self::PROPERTY_BIT) != 0
  }
}

impl core::fmt::Debug for ChunkTag {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')
  }
}
impl core::fmt::Display for ChunkTag {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

impl From<[u8; 4]> for ChunkTag {
  #[inline]
  #[must_use]
  fn from(array: [u8; 4]) -> Self {
    Self(array)
  }
}
impl From<ChunkTag> for [u8; 4] {
  #[inline]
  #[must_use]
  fn from(tag: ChunkTag) -> Self {
    tag.0
  }
}
