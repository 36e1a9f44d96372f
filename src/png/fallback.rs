use std::{any::Any, collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use super::*;

/// A decoded value of a type that's only known to whoever decoded it.
pub type FallbackValue = Arc<dyn Any + Send + Sync>;

/// Values from custom decoders, stored by chunk tag.
///
/// The values for each tag stay in the order they were recorded.
///
/// All access goes through one readers-writer lock. Any number of lookups can
/// run at once, while a `record` excludes everything else. A lookup gives a
/// snapshot: it sees each `record` either fully done or not at all.
#[derive(Default)]
pub struct FallbackStore {
  entries: RwLock<HashMap<ChunkTag, Vec<FallbackValue>>>,
}
impl Debug for FallbackStore {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let entries = self.entries.read();
    let mut counts: Vec<(ChunkTag, usize)> = entries.iter().map(|(t, v)| (*t, v.len())).collect();
    counts.sort_unstable();
    f.debug_map().entries(counts).finish()
  }
}
impl FallbackStore {
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a value to the list for the tag.
  #[inline]
  pub fn record<T: Any + Send + Sync>(&self, tag: ChunkTag, value: T) {
    self.record_erased(tag, Arc::new(value));
  }

  /// Appends an already type-erased value to the list for the tag.
  pub fn record_erased(&self, tag: ChunkTag, value: FallbackValue) {
    let mut entries = self.entries.write();
    let list = entries.entry(tag).or_default();
    list.push(value);
    tracing::trace!(%tag, count = list.len(), "recorded fallback value");
  }

  /// Makes sure the tag has a list, even if it's empty.
  ///
  /// This marks that a decoder for the tag ran, even though it found nothing.
  #[inline]
  pub fn register(&self, tag: ChunkTag) {
    self.entries.write().entry(tag).or_default();
  }

  /// A snapshot of the values for the tag.
  ///
  /// `None` means no decoder for this tag ever recorded or registered here.
  #[inline]
  #[must_use]
  pub fn lookup(&self, tag: ChunkTag) -> Option<Vec<FallbackValue>> {
    self.entries.read().get(&tag).cloned()
  }

  /// A snapshot of the values for the tag that have type `T`.
  ///
  /// Values of any other type are skipped.
  #[must_use]
  pub fn lookup_as<T: Any + Send + Sync>(&self, tag: ChunkTag) -> Option<Vec<Arc<T>>> {
    let values = self.lookup(tag)?;
    Some(values.into_iter().filter_map(|value| value.downcast::<T>().ok()).collect())
  }

  #[inline]
  #[must_use]
  pub fn contains(&self, tag: ChunkTag) -> bool {
    self.entries.read().contains_key(&tag)
  }

  /// The number of values for the tag.
  #[inline]
  #[must_use]
  pub fn count(&self, tag: ChunkTag) -> usize {
    self.entries.read().get(&tag).map_or(0, Vec::len)
  }

  /// All tags with a list, sorted.
  #[must_use]
  pub fn tags(&self) -> Vec<ChunkTag> {
    let mut tags: Vec<ChunkTag> = self.entries.read().keys().copied().collect();
    tags.sort_unstable();
    tags
  }

  /// The number of tags with a list.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.read().is_empty()
  }
}
