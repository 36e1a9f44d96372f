use super::*;

/// `tIME`: Image last-modification time.
///
/// Last image modification time, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub struct tIME {
  /// 4-digit year.
  pub year: u16,
  /// 1-12
  pub month: u8,
  /// 1-31
  pub day: u8,
  /// 0-23
  pub hour: u8,
  /// 0-59
  pub minute: u8,
  /// 0-60 (use 60 for leap seconds)
  pub second: u8,
}
impl TryFrom<&[u8]> for tIME {
  type Error = ParseError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let [y0, y1, month, day, hour, minute, second] = *data else {
      return Err(ParseError::WrongLength { expected: 7, actual: data.len() });
    };
    let checks: [(&'static str, u8, core::ops::RangeInclusive<u8>); 5] = [
      ("month", month, 1..=12),
      ("day", day, 1..=31),
      ("hour", hour, 0..=23),
      ("minute", minute, 0..=59),
      ("second", second, 0..=60),
    ];
    for (field, value, range) in checks {
      if !range.contains(&value) {
        return Err(ParseError::InvalidValue { field, value: u32::from(value) });
      }
    }
    Ok(tIME { year: u16::from_be_bytes([y0, y1]), month, day, hour, minute, second })
  }
}
impl tIME {
  /// Seconds since 1970-01-01 00:00:00 UTC, on the proleptic Gregorian
  /// calendar.
  ///
  /// Out of range days roll over into the next month, so Feb 30 is Mar 1 or
  /// 2, and a leap second of 60 counts as the first second of the next minute.
  #[inline]
  #[must_use]
  pub const fn to_unix_seconds(&self) -> i64 {
    // days from the civil date, with years starting in March
    let month = self.month as i64;
    let year = self.year as i64 - if month <= 2 { 1 } else { 0 };
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + self.day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    let days = era * 146_097 + day_of_era - 719_468;
    days * 86_400 + self.hour as i64 * 3_600 + self.minute as i64 * 60 + self.second as i64
  }
}
impl KnownChunk for tIME {
  const TAG: ChunkTag = ChunkTag::tIME;
  #[inline]
  fn from_raw(raw: &RawChunk) -> Result<Self, ParseError> {
    Self::try_from(raw.data())
  }
}

#[test]
fn test_time_parse() {
  let t = tIME::try_from(&[0x07, 0xE8, 2, 29, 23, 59, 60][..]).unwrap();
  assert_eq!((t.year, t.month, t.day, t.second), (2024, 2, 29, 60));
  assert_eq!(
    tIME::try_from(&[0x07, 0xE8, 13, 1, 0, 0, 0][..]),
    Err(ParseError::InvalidValue { field: "month", value: 13 })
  );
  assert!(tIME::try_from(&[0x07, 0xE8, 1, 1, 0, 0][..]).is_err());
}

#[test]
fn test_time_to_unix_seconds() {
  let at = |year, month, day, hour, minute, second| {
    tIME { year, month, day, hour, minute, second }.to_unix_seconds()
  };
  assert_eq!(at(1970, 1, 1, 0, 0, 0), 0);
  assert_eq!(at(1969, 12, 31, 23, 59, 59), -1);
  assert_eq!(at(2000, 3, 1, 0, 0, 0), 951_868_800);
  assert_eq!(at(2024, 2, 29, 23, 59, 59), 1_709_251_199);
  assert_eq!(at(2024, 2, 29, 23, 59, 60), at(2024, 3, 1, 0, 0, 0));
}
