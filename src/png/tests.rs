use super::*;

const GREY_1X1: [u8; 13] = [0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0];

fn png_from(chunks: &[RawChunk]) -> Vec<u8> {
  let mut v = Vec::new();
  write_png_chunks(&mut v, chunks).unwrap();
  v
}

fn ihdr() -> RawChunk {
  RawChunk::new(ChunkTag::IHDR, GREY_1X1.to_vec())
}
fn idat(data: &[u8]) -> RawChunk {
  RawChunk::new(ChunkTag::IDAT, data.to_vec())
}
fn iend() -> RawChunk {
  RawChunk::new(ChunkTag::IEND, Bytes::new())
}

fn format_err(result: Result<PngContainer, PngError>) -> FormatError {
  match result {
    Err(PngError::Format(e)) => e,
    other => panic!("expected a format error, got {other:?}"),
  }
}

#[test]
fn test_minimal_png() {
  let png = PngContainer::from_bytes(&png_from(&[ihdr(), idat(&[0]), iend()])).unwrap();
  assert_eq!(png.header().width, 1);
  assert_eq!(png.header().height, 1);
  assert_eq!(png.header().color_type, PngColorType::Y);
  assert_eq!(png.image_data().len(), 1);
  assert_eq!(*png.terminal(), IEND);
  assert!(png.palette().is_none());
  assert!(png.texts().is_empty());
  assert!(png.skipped().is_empty());
  assert!(png.residual().is_empty());
  assert!(png.fallback().is_empty());
}

#[test]
fn test_bad_signature() {
  let mut v = png_from(&[ihdr(), idat(&[0]), iend()]);
  v[7] ^= 0xFF;
  assert_eq!(format_err(PngContainer::from_bytes(&v)), FormatError::BadSignature);
}

#[test]
fn test_no_image_data() {
  let v = png_from(&[ihdr(), iend()]);
  assert_eq!(format_err(PngContainer::from_bytes(&v)), FormatError::NoImageData);
}

#[test]
fn test_image_data_keeps_stream_order() {
  let v = png_from(&[ihdr(), idat(&[1, 2]), idat(&[3]), iend()]);
  let png = PngContainer::from_bytes(&v).unwrap();
  let data: Vec<&[u8]> = png.image_data_bytes().collect();
  assert_eq!(data, [&[1, 2][..], &[3][..]]);
}

#[test]
fn test_missing_header() {
  let v = png_from(&[idat(&[0]), iend()]);
  assert_eq!(format_err(PngContainer::from_bytes(&v)), FormatError::MissingHeader { cause: None });

  let v = png_from(&[RawChunk::new(ChunkTag::IHDR, vec![0; 12]), idat(&[0]), iend()]);
  assert_eq!(
    format_err(PngContainer::from_bytes(&v)),
    FormatError::MissingHeader { cause: Some(ParseError::WrongLength { expected: 13, actual: 12 }) }
  );
}

#[test]
fn test_bad_terminator() {
  let v = png_from(&[ihdr(), idat(&[0]), RawChunk::new(ChunkTag::IEND, vec![1])]);
  assert!(matches!(
    format_err(PngContainer::from_bytes(&v)),
    FormatError::InvalidChunk { tag: ChunkTag::IEND, .. }
  ));
  // a pool built by hand can lack an IEND entirely
  let pool: ChunkPool = [ihdr(), idat(&[0])].into_iter().collect();
  assert!(matches!(
    assemble(pool, &ParseConfig::default()),
    Err(PngError::Format(FormatError::MissingTerminator))
  ));
}

#[test]
fn test_physical_order_doesnt_matter() {
  let gama = RawChunk::new(ChunkTag::gAMA, 45455_u32.to_be_bytes().to_vec());
  let text = RawChunk::new(ChunkTag::tEXt, &b"Title\0Order"[..]);
  let v = png_from(&[text, idat(&[9]), gama, ihdr(), idat(&[8]), iend()]);
  let png = PngContainer::from_bytes(&v).unwrap();
  assert_eq!(png.header().width, 1);
  assert_eq!(png.gamma().map(|g| g.gamma), Some(45455));
  assert_eq!(png.texts()[0].keyword(), "Title");
  let data: Vec<&[u8]> = png.image_data_bytes().collect();
  assert_eq!(data, [&[9][..], &[8][..]]);
}

#[test]
fn test_ancillary_fields() {
  let v = png_from(&[
    ihdr(),
    RawChunk::new(ChunkTag::PLTE, vec![0, 0, 0, 255, 255, 255]),
    RawChunk::new(ChunkTag::bKGD, vec![0, 7]),
    RawChunk::new(ChunkTag::pHYs, vec![0, 0, 11, 19, 0, 0, 11, 19, 1]),
    RawChunk::new(ChunkTag::tIME, vec![7, 230, 2, 28, 23, 59, 60]),
    RawChunk::new(ChunkTag::sBIT, vec![5]),
    RawChunk::new(ChunkTag::tRNS, vec![0, 3]),
    idat(&[0]),
    RawChunk::new(ChunkTag::zTXt, &b"Comment\0\0zz"[..]),
    RawChunk::new(ChunkTag::tEXt, &b"A\0one"[..]),
    RawChunk::new(ChunkTag::tEXt, &b"B\0two"[..]),
    iend(),
  ]);
  let png = PngContainer::from_bytes(&v).unwrap();
  assert_eq!(png.palette().map(PLTE::len), Some(2));
  assert!(png.background().is_some());
  assert!(png.physical_dimensions().is_some());
  assert!(png.modified().is_some());
  assert!(png.significant_bits().is_some());
  assert!(png.transparency().is_some());
  assert!(png.chromaticities().is_none());
  assert!(png.histogram().is_none());
  let keywords: Vec<String> = png.texts().iter().map(tEXt::keyword).collect();
  assert_eq!(keywords, ["A", "B"]);
  assert_eq!(png.compressed_texts()[0].keyword(), "Comment");
  assert!(png.residual().is_empty());
}

#[test]
fn test_bad_ancillary_lenient_and_strict() {
  let v = png_from(&[
    ihdr(),
    RawChunk::new(ChunkTag::gAMA, vec![0, 0, 0]),
    RawChunk::new(ChunkTag::pHYs, vec![0, 0, 0, 1, 0, 0, 0, 1, 0]),
    idat(&[0]),
    iend(),
  ]);

  let png = PngContainer::from_bytes(&v).unwrap();
  assert!(png.gamma().is_none());
  assert!(png.physical_dimensions().is_some());
  assert_eq!(png.skipped(), [(ChunkTag::gAMA, ParseError::WrongLength { expected: 4, actual: 3 })]);
  // retained by default, so a custom decoder can still look at it
  assert_eq!(png.residual().tags().collect::<Vec<_>>(), [ChunkTag::gAMA]);

  let discard = ParseConfig::new().with_parse_failure(ParseFailurePolicy::Discard);
  let png = PngContainer::from_reader_with(&v[..], &discard).unwrap();
  assert_eq!(png.skipped().len(), 1);
  assert!(png.residual().is_empty());

  let strict = ParseConfig::new().with_strict_ancillary(true);
  assert_eq!(
    format_err(PngContainer::from_reader_with(&v[..], &strict)),
    FormatError::InvalidChunk {
      tag: ChunkTag::gAMA,
      source: ParseError::WrongLength { expected: 4, actual: 3 }
    }
  );
}

#[test]
fn test_bad_text_is_fatal() {
  let v = png_from(&[ihdr(), idat(&[0]), RawChunk::new(ChunkTag::tEXt, &b"no null"[..]), iend()]);
  assert_eq!(
    format_err(PngContainer::from_bytes(&v)),
    FormatError::InvalidChunk { tag: ChunkTag::tEXt, source: ParseError::MissingSeparator }
  );
}

#[test]
fn test_truncated_and_crc() {
  let v = png_from(&[ihdr(), idat(&[0]), iend()]);
  for cut in [8, 20, v.len() - 1] {
    assert!(
      matches!(format_err(PngContainer::from_bytes(&v[..cut])), FormatError::Truncated { .. }),
      "cut at {cut}"
    );
  }

  let v = png_from(&[ihdr(), RawChunk::with_declared_crc(ChunkTag::IDAT, vec![0], 0), iend()]);
  assert!(PngContainer::from_bytes(&v).is_ok());
  let config = ParseConfig::new().with_verify_crc(true);
  assert!(matches!(
    format_err(PngContainer::from_reader_with(&v[..], &config)),
    FormatError::CrcMismatch { tag: ChunkTag::IDAT, declared: 0, .. }
  ));
}

#[test]
fn test_claim_custom() {
  const GRAB: ChunkTag = ChunkTag(*b"grAb");
  let grab = FnDecoder::new(GRAB, |raw: &RawChunk| match raw.data() {
    [x0, x1, x2, x3, y0, y1, y2, y3] => Ok((
      i32::from_be_bytes([*x0, *x1, *x2, *x3]),
      i32::from_be_bytes([*y0, *y1, *y2, *y3]),
    )),
    other => Err(ParseError::WrongLength { expected: 8, actual: other.len() }),
  });
  let v = png_from(&[
    ihdr(),
    RawChunk::new(GRAB, [(-3_i32).to_be_bytes(), 4_i32.to_be_bytes()].concat()),
    idat(&[0]),
    RawChunk::new(GRAB, vec![1]),
    iend(),
  ]);
  let mut png = PngContainer::from_bytes(&v).unwrap();
  assert_eq!(png.residual().count(GRAB), 2);

  assert_eq!(png.claim_custom(&grab, false), Ok(()));
  assert_eq!(*png.fallback().lookup_as::<(i32, i32)>(GRAB).unwrap()[0], (-3, 4));
  assert!(matches!(png.claim_custom(&grab, false), Err(ClaimError::Parse { tag: GRAB, .. })));
  assert_eq!(png.fallback().count(GRAB), 1);
  assert_eq!(png.residual().count(GRAB), 1);

  let missing = FnDecoder::new(ChunkTag(*b"miSs"), |_: &RawChunk| Ok::<_, ParseError>(()));
  assert_eq!(png.claim_custom(&missing, false), Err(ClaimError::NotFound(ChunkTag(*b"miSs"))));
  assert!(png.fallback().lookup(ChunkTag(*b"miSs")).is_none());
  assert_eq!(png.claim_custom(&missing, true), Err(ClaimError::NotFound(ChunkTag(*b"miSs"))));
  assert_eq!(png.fallback().lookup(ChunkTag(*b"miSs")).map(|v| v.len()), Some(0));

  assert_eq!(png.claim_all_custom(&missing), Ok(0));
  let unclaimed: Vec<ChunkTag> = png.into_unclaimed().iter().map(RawChunk::tag).collect();
  assert_eq!(unclaimed, [GRAB]);
}

#[test]
fn test_assemble_applies_config_policy() {
  let chunks = || {
    [ihdr(), RawChunk::new(ChunkTag::gAMA, vec![0, 0, 0]), idat(&[0]), iend()].into_iter()
  };
  let discard = ParseConfig::new().with_parse_failure(ParseFailurePolicy::Discard);
  // a collected pool starts out retaining, the config still wins
  let pool: ChunkPool = chunks().collect();
  let png = assemble(pool, &discard).unwrap();
  assert_eq!(png.skipped().len(), 1);
  assert!(png.residual().is_empty());
  assert_eq!(png.residual().parse_failure_policy(), ParseFailurePolicy::Discard);

  let mut pool = ChunkPool::with_policy(ParseFailurePolicy::Discard);
  pool.extend(chunks());
  let png = assemble(pool, &ParseConfig::default()).unwrap();
  assert_eq!(png.residual().tags().collect::<Vec<_>>(), [ChunkTag::gAMA]);
}

/// Gives the PNG signature, then fails.
struct FailAfterSignature {
  sent: usize,
}
impl Read for FailAfterSignature {
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let rest = &PNG_SIGNATURE[self.sent..];
    if rest.is_empty() {
      return Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access"));
    }
    let n = rest.len().min(buf.len());
    buf[..n].copy_from_slice(&rest[..n]);
    self.sent += n;
    Ok(n)
  }
}

#[test]
fn test_io_errors_pass_through() {
  match PngContainer::from_reader(FailAfterSignature { sent: 0 }) {
    Err(PngError::Io(e)) => {
      assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied);
      assert_eq!(e.to_string(), "no access");
    }
    other => panic!("expected an I/O error, got {other:?}"),
  }
}
