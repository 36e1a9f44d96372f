use core::marker::PhantomData;

use super::*;

/// Something that can claim chunks of one tag out of a [`ChunkPool`].
///
/// The pool only ever calls `parse` with a chunk whose tag equals `tag()`.
pub trait ChunkDecoder {
  /// The value produced from one chunk.
  type Output;

  /// The tag of the chunks this decoder wants.
  fn tag(&self) -> ChunkTag;

  /// Decodes the data of one chunk.
  fn parse(&self, raw: &RawChunk) -> Result<Self::Output, ParseError>;
}

impl<D: ChunkDecoder + ?Sized> ChunkDecoder for &D {
  type Output = D::Output;
  #[inline]
  fn tag(&self) -> ChunkTag {
    (**self).tag()
  }
  #[inline]
  fn parse(&self, raw: &RawChunk) -> Result<Self::Output, ParseError> {
    (**self).parse(raw)
  }
}

/// A chunk kind with a fixed tag and a built-in parser.
pub trait KnownChunk: Sized {
  /// The tag of this chunk kind.
  const TAG: ChunkTag;

  /// Parses the data of a chunk with the right tag.
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError>;
}

/// The decoder for any [`KnownChunk`] type.
pub struct Builtin<T>(PhantomData<fn() -> T>);
impl<T> Builtin<T> {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self(PhantomData)
  }
}
impl<T> Default for Builtin<T> {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::new()
  }
}
impl<T> Clone for Builtin<T> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}
impl<T> Copy for Builtin<T> {}
impl<T: KnownChunk> Debug for Builtin<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Builtin").field(&T::TAG).finish()
  }
}
impl<T: KnownChunk> ChunkDecoder for Builtin<T> {
  type Output = T;
  #[inline]
  fn tag(&self) -> ChunkTag {
    T::TAG
  }
  #[inline]
  fn parse(&self, raw: &RawChunk) -> Result<T, ParseError> {
    T::from_raw(raw)
  }
}

/// Makes a decoder out of a tag and a closure.
///
/// ```
/// # use pngclaim::{png::*, *};
/// let offs = FnDecoder::new(ChunkTag(*b"oFFs"), |raw: &RawChunk| match raw.data() {
///   [x0, x1, x2, x3, y0, y1, y2, y3, unit] => Ok((
///     i32::from_be_bytes([*x0, *x1, *x2, *x3]),
///     i32::from_be_bytes([*y0, *y1, *y2, *y3]),
///     *unit,
///   )),
///   other => Err(ParseError::WrongLength { expected: 9, actual: other.len() }),
/// });
/// assert_eq!(offs.tag(), ChunkTag(*b"oFFs"));
/// ```
#[derive(Clone, Copy)]
pub struct FnDecoder<F> {
  tag: ChunkTag,
  f: F,
}
impl<F> FnDecoder<F> {
  #[inline]
  #[must_use]
  pub const fn new(tag: ChunkTag, f: F) -> Self {
    Self { tag, f }
  }
}
impl<F> Debug for FnDecoder<F> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("FnDecoder").field(&self.tag).finish()
  }
}
impl<F, T> ChunkDecoder for FnDecoder<F>
where
  F: Fn(&RawChunk) -> Result<T, ParseError>,
{
  type Output = T;
  #[inline]
  fn tag(&self) -> ChunkTag {
    self.tag
  }
  #[inline]
  fn parse(&self, raw: &RawChunk) -> Result<T, ParseError> {
    (self.f)(raw)
  }
}
