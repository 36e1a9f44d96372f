use std::io::{self, Read};

use crate::{FormatError, ParseError, PngError};

/// Reads exactly `N` bytes, or fails with [`FormatError::Truncated`].
#[inline]
pub(crate) fn read_byte_array<R: Read, const N: usize>(
  reader: &mut R, context: &'static str,
) -> Result<[u8; N], PngError> {
  let mut a = [0_u8; N];
  match reader.read_exact(&mut a) {
    Ok(()) => Ok(a),
    Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
      Err(FormatError::Truncated { context }.into())
    }
    Err(e) => Err(PngError::Io(e)),
  }
}

/// Reads exactly `len` bytes, without trusting `len` for the allocation size.
#[inline]
pub(crate) fn read_byte_vec<R: Read>(
  reader: &mut R, len: u32, context: &'static str,
) -> Result<Vec<u8>, PngError> {
  let mut v = Vec::new();
  reader.by_ref().take(u64::from(len)).read_to_end(&mut v)?;
  if v.len() == len as usize {
    Ok(v)
  } else {
    Err(FormatError::Truncated { context }.into())
  }
}

#[inline]
pub(crate) fn expect_len(bytes: &[u8], expected: usize) -> Result<(), ParseError> {
  if bytes.len() == expected {
    Ok(())
  } else {
    Err(ParseError::WrongLength { expected, actual: bytes.len() })
  }
}

#[inline]
#[must_use]
pub(crate) fn u32_be(bytes: &[u8]) -> u32 {
  let mut a = [0_u8; 4];
  a.copy_from_slice(&bytes[..4]);
  u32::from_be_bytes(a)
}

/// Splits `keyword\0rest`, checking the keyword is 1 to 79 bytes.
#[inline]
pub(crate) fn split_keyword(bytes: &[u8]) -> Result<(&[u8], &[u8]), ParseError> {
  let mut it = bytes.splitn(2, |u| u == &0_u8);
  let keyword = it.next().unwrap_or_default();
  let rest = it.next().ok_or(ParseError::MissingSeparator)?;
  if (1..=79).contains(&keyword.len()) {
    Ok((keyword, rest))
  } else {
    Err(ParseError::KeywordLength(keyword.len()))
  }
}

/// Latin-1 bytes map directly onto the first 256 unicode code points.
#[inline]
#[must_use]
pub(crate) fn latin1_to_string(bytes: &[u8]) -> String {
  bytes.iter().copied().map(char::from).collect()
}
