use super::*;

/// The chunks of a PNG that haven't been claimed yet.
///
/// Chunks keep the slot they were given when read, so the pool always
/// iterates in stream order. Claiming a chunk empties its slot and that slot
/// is never filled again: a chunk can be claimed at most once.
///
/// The pool is not shared between threads. Claiming needs `&mut self`.
#[derive(Clone, Default)]
pub struct ChunkPool {
  slots: Vec<Option<RawChunk>>,
  parse_failure: ParseFailurePolicy,
}
impl Debug for ChunkPool {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ChunkPool")
      .field("unclaimed", &self.tags().collect::<Vec<_>>())
      .field("slots", &self.slots.len())
      .field("parse_failure", &self.parse_failure)
      .finish()
  }
}
impl ChunkPool {
  /// An empty pool that retains chunks that fail to parse.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self::with_policy(ParseFailurePolicy::Retain)
  }

  #[inline]
  #[must_use]
  pub const fn with_policy(parse_failure: ParseFailurePolicy) -> Self {
    Self { slots: Vec::new(), parse_failure }
  }

  #[inline]
  #[must_use]
  pub const fn parse_failure_policy(&self) -> ParseFailurePolicy {
    self.parse_failure
  }

  /// Changes what later failed claims do. Chunks already retained stay.
  #[inline]
  pub fn set_parse_failure_policy(&mut self, parse_failure: ParseFailurePolicy) {
    self.parse_failure = parse_failure;
  }

  /// Adds a chunk after all chunks already in the pool.
  #[inline]
  pub fn push(&mut self, raw: RawChunk) {
    self.slots.push(Some(raw));
  }

  /// How many chunks have ever been added, claimed or not.
  #[inline]
  #[must_use]
  pub fn slot_count(&self) -> usize {
    self.slots.len()
  }

  /// How many chunks are still unclaimed.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.slots.iter().filter(|slot| slot.is_some()).count()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.slots.iter().all(Option::is_none)
  }

  /// The unclaimed chunks, in stream order.
  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = &RawChunk> + '_ {
    self.slots.iter().flatten()
  }

  /// The tags of the unclaimed chunks, in stream order.
  #[inline]
  pub fn tags(&self) -> impl Iterator<Item = ChunkTag> + '_ {
    self.iter().map(RawChunk::tag)
  }

  #[inline]
  #[must_use]
  pub fn contains(&self, tag: ChunkTag) -> bool {
    self.iter().any(|raw| raw.tag() == tag)
  }

  /// The number of unclaimed chunks with the tag.
  #[inline]
  #[must_use]
  pub fn count(&self, tag: ChunkTag) -> usize {
    self.iter().filter(|raw| raw.tag() == tag).count()
  }

  /// Claims the first unclaimed chunk with the decoder's tag.
  ///
  /// * If there's no such chunk you get [`ClaimError::NotFound`], and nothing
  ///   changes.
  /// * If the decoder parses the chunk, that one chunk is removed from the
  ///   pool and you get the value.
  /// * If the decoder fails you get [`ClaimError::Parse`]. The chunk stays in
  ///   the pool or is removed according to the pool's
  ///   [`ParseFailurePolicy`].
  pub fn claim<D: ChunkDecoder + ?Sized>(&mut self, decoder: &D) -> Result<D::Output, ClaimError> {
    let tag = decoder.tag();
    let found = self
      .slots
      .iter()
      .enumerate()
      .find_map(|(index, slot)| slot.as_ref().filter(|raw| raw.tag() == tag).map(|raw| (index, raw)));
    let Some((index, raw)) = found else {
      tracing::trace!(%tag, "no chunk to claim");
      return Err(ClaimError::NotFound(tag));
    };
    match decoder.parse(raw) {
      Ok(value) => {
        tracing::trace!(%tag, index, "claimed chunk");
        self.slots[index] = None;
        Ok(value)
      }
      Err(source) => {
        tracing::debug!(%tag, index, error = %source, policy = ?self.parse_failure, "chunk failed to parse");
        if self.parse_failure == ParseFailurePolicy::Discard {
          self.slots[index] = None;
        }
        Err(ClaimError::Parse { tag, source })
      }
    }
  }

  /// Claims chunks until there's none left with the decoder's tag.
  ///
  /// The values are in stream order. Stops at the first parse failure, and
  /// the values claimed before that are dropped.
  pub fn claim_all<D: ChunkDecoder + ?Sized>(
    &mut self, decoder: &D,
  ) -> Result<Vec<D::Output>, ClaimError> {
    let mut out = Vec::new();
    loop {
      match self.claim(decoder) {
        Ok(value) => out.push(value),
        Err(ClaimError::NotFound(_)) => return Ok(out),
        Err(e) => return Err(e),
      }
    }
  }

  /// Takes all the unclaimed chunks, in stream order.
  #[inline]
  #[must_use]
  pub fn into_unclaimed(self) -> Vec<RawChunk> {
    self.slots.into_iter().flatten().collect()
  }
}
impl FromIterator<RawChunk> for ChunkPool {
  #[inline]
  fn from_iter<I: IntoIterator<Item = RawChunk>>(iter: I) -> Self {
    Self { slots: iter.into_iter().map(Some).collect(), parse_failure: ParseFailurePolicy::Retain }
  }
}
impl Extend<RawChunk> for ChunkPool {
  #[inline]
  fn extend<I: IntoIterator<Item = RawChunk>>(&mut self, iter: I) {
    self.slots.extend(iter.into_iter().map(Some));
  }
}
