use std::{any::Any, sync::Arc};

use super::*;

/// A parsed PNG: the known chunks, decoded, plus everything left over.
///
/// Build one with [`PngContainer::from_reader`] (or [`parse_png`]), or run
/// [`segment`] and [`assemble`] yourself.
///
/// The known fields never change after assembly. Chunks that no built-in
/// decoder claimed stay in the [residual pool](Self::residual), and can be
/// claimed with [`claim_custom`](Self::claim_custom), which puts the values
/// in the container's [`FallbackStore`]. Any chunk still unclaimed when the
/// container drops is dropped with it.
#[derive(Debug)]
pub struct PngContainer {
  pub(crate) header: IHDR,
  pub(crate) image_data: Vec<IDAT>,
  pub(crate) palette: Option<PLTE>,
  pub(crate) background: Option<bKGD>,
  pub(crate) chromaticities: Option<cHRM>,
  pub(crate) gamma: Option<gAMA>,
  pub(crate) histogram: Option<hIST>,
  pub(crate) physical_dimensions: Option<pHYs>,
  pub(crate) significant_bits: Option<sBIT>,
  pub(crate) transparency: Option<tRNS>,
  pub(crate) modified: Option<tIME>,
  pub(crate) texts: Vec<tEXt>,
  pub(crate) compressed_texts: Vec<zTXt>,
  pub(crate) terminal: IEND,
  pub(crate) skipped: Vec<(ChunkTag, ParseError)>,
  pub(crate) residual: ChunkPool,
  pub(crate) fallback: Arc<FallbackStore>,
}

/// Parses a PNG with the default [`ParseConfig`].
#[inline]
pub fn parse_png<R: Read>(reader: R) -> Result<PngContainer, PngError> {
  PngContainer::from_reader(reader)
}

impl PngContainer {
  #[inline]
  pub fn from_reader<R: Read>(reader: R) -> Result<Self, PngError> {
    Self::from_reader_with(reader, &ParseConfig::default())
  }

  /// Segments the datastream, then [assembles](assemble) the known chunks.
  pub fn from_reader_with<R: Read>(reader: R, config: &ParseConfig) -> Result<Self, PngError> {
    let pool = segment(reader, config)?;
    assemble(pool, config)
  }

  #[inline]
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, PngError> {
    Self::from_reader(bytes)
  }

  #[inline]
  #[must_use]
  pub const fn header(&self) -> &IHDR {
    &self.header
  }

  /// All the `IDAT` chunks, in stream order. Never empty.
  #[inline]
  #[must_use]
  pub fn image_data(&self) -> &[IDAT] {
    &self.image_data
  }

  /// The compressed image bytes of every `IDAT`, one slice per chunk.
  ///
  /// Together they make a single zlib stream.
  #[inline]
  pub fn image_data_bytes(&self) -> impl Iterator<Item = &[u8]> + '_ {
    self.image_data.iter().map(IDAT::as_bytes)
  }

  #[inline]
  #[must_use]
  pub const fn palette(&self) -> Option<&PLTE> {
    self.palette.as_ref()
  }

  #[inline]
  #[must_use]
  pub const fn background(&self) -> Option<&bKGD> {
    self.background.as_ref()
  }

  #[inline]
  #[must_use]
  pub const fn chromaticities(&self) -> Option<&cHRM> {
    self.chromaticities.as_ref()
  }

  #[inline]
  #[must_use]
  pub const fn gamma(&self) -> Option<&gAMA> {
    self.gamma.as_ref()
  }

  #[inline]
  #[must_use]
  pub const fn histogram(&self) -> Option<&hIST> {
    self.histogram.as_ref()
  }

  #[inline]
  #[must_use]
  pub const fn physical_dimensions(&self) -> Option<&pHYs> {
    self.physical_dimensions.as_ref()
  }

  #[inline]
  #[must_use]
  pub const fn significant_bits(&self) -> Option<&sBIT> {
    self.significant_bits.as_ref()
  }

  #[inline]
  #[must_use]
  pub const fn transparency(&self) -> Option<&tRNS> {
    self.transparency.as_ref()
  }

  /// The last modification time, from `tIME`.
  #[inline]
  #[must_use]
  pub const fn modified(&self) -> Option<&tIME> {
    self.modified.as_ref()
  }

  #[inline]
  #[must_use]
  pub fn texts(&self) -> &[tEXt] {
    &self.texts
  }

  #[inline]
  #[must_use]
  pub fn compressed_texts(&self) -> &[zTXt] {
    &self.compressed_texts
  }

  #[inline]
  #[must_use]
  pub const fn terminal(&self) -> &IEND {
    &self.terminal
  }

  /// Ancillary chunks that failed to parse and were left out, with the
  /// reason. Always empty with [`ParseConfig::strict_ancillary`].
  #[inline]
  #[must_use]
  pub fn skipped(&self) -> &[(ChunkTag, ParseError)] {
    &self.skipped
  }

  /// The chunks that haven't been claimed yet.
  #[inline]
  #[must_use]
  pub const fn residual(&self) -> &ChunkPool {
    &self.residual
  }

  #[inline]
  #[must_use]
  pub fn fallback(&self) -> &FallbackStore {
    &self.fallback
  }

  /// A shared handle to the fallback store, for looking things up from other
  /// threads while this container keeps claiming.
  #[inline]
  #[must_use]
  pub fn fallback_handle(&self) -> Arc<FallbackStore> {
    Arc::clone(&self.fallback)
  }

  /// Claims one residual chunk with a custom decoder.
  ///
  /// On success the value is recorded in the [`FallbackStore`] under the
  /// decoder's tag. When there's no chunk with that tag you get
  /// [`ClaimError::NotFound`] either way, but with `retain_on_miss` the tag
  /// is first registered in the store with no values, so a lookup can tell
  /// "the decoder ran and found nothing" apart from "never decoded".
  ///
  /// Parse failures follow the residual pool's [`ParseFailurePolicy`], and the
  /// store isn't touched.
  pub fn claim_custom<D>(&mut self, decoder: &D, retain_on_miss: bool) -> Result<(), ClaimError>
  where
    D: ChunkDecoder + ?Sized,
    D::Output: Any + Send + Sync,
  {
    let tag = decoder.tag();
    match self.residual.claim(decoder) {
      Ok(value) => {
        self.fallback.record(tag, value);
        Ok(())
      }
      Err(ClaimError::NotFound(tag)) => {
        if retain_on_miss {
          self.fallback.register(tag);
        }
        Err(ClaimError::NotFound(tag))
      }
      Err(e) => Err(e),
    }
  }

  /// Claims every residual chunk the decoder can take, returning how many.
  ///
  /// The tag is always registered in the store, even when nothing matched.
  /// Stops at the first parse failure, keeping whatever was recorded before.
  pub fn claim_all_custom<D>(&mut self, decoder: &D) -> Result<usize, ClaimError>
  where
    D: ChunkDecoder + ?Sized,
    D::Output: Any + Send + Sync,
  {
    let mut count = 0;
    loop {
      match self.claim_custom(decoder, true) {
        Ok(()) => count += 1,
        Err(ClaimError::NotFound(_)) => return Ok(count),
        Err(e) => return Err(e),
      }
    }
  }

  /// Takes the chunks that were never claimed, in stream order.
  #[inline]
  #[must_use]
  pub fn into_unclaimed(self) -> Vec<RawChunk> {
    self.residual.into_unclaimed()
  }
}
