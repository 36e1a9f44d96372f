use std::sync::Arc;

use pngclaim::{png::*, *};
use walkdir::WalkDir;

fn png_from(chunks: &[RawChunk]) -> Vec<u8> {
  let mut v = Vec::new();
  write_png_chunks(&mut v, chunks).unwrap();
  v
}

fn minimal_chunks() -> Vec<RawChunk> {
  vec![
    RawChunk::new(ChunkTag::IHDR, vec![0, 0, 0, 2, 0, 0, 0, 3, 8, 2, 0, 0, 0]),
    RawChunk::new(ChunkTag::IDAT, vec![0x78, 0x9C]),
    RawChunk::new(ChunkTag::IEND, vec![]),
  ]
}

/// `oFFs`: image position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Offset {
  x: i32,
  y: i32,
  unit: u8,
}

struct OffsetDecoder;
impl ChunkDecoder for OffsetDecoder {
  type Output = Offset;
  fn tag(&self) -> ChunkTag {
    ChunkTag(*b"oFFs")
  }
  fn parse(&self, raw: &RawChunk) -> Result<Offset, ParseError> {
    match *raw.data() {
      [x0, x1, x2, x3, y0, y1, y2, y3, unit @ (0 | 1)] => Ok(Offset {
        x: i32::from_be_bytes([x0, x1, x2, x3]),
        y: i32::from_be_bytes([y0, y1, y2, y3]),
        unit,
      }),
      [_, _, _, _, _, _, _, _, unit] => {
        Err(ParseError::InvalidValue { field: "unit", value: u32::from(unit) })
      }
      ref other => Err(ParseError::WrongLength { expected: 9, actual: other.len() }),
    }
  }
}

fn offs(x: i32, y: i32) -> RawChunk {
  let mut data = Vec::new();
  data.extend(x.to_be_bytes());
  data.extend(y.to_be_bytes());
  data.push(0);
  RawChunk::new(ChunkTag(*b"oFFs"), data)
}

#[test]
fn test_segment_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  let mut png_files = 0;
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let result = parse_png(&v[..]);
    if entry.path().extension().is_some_and(|ext| ext == "png") {
      assert!(result.is_ok(), "{}: {result:?}", entry.path().display());
      png_files += 1;
    }
  }
  assert!(png_files >= 3, "only found {png_files} png files");
  // even totally random data should never panic the parser!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let _ = segment_bytes(&v, &ParseConfig::default());
    let _ = parse_png(&v[..]);
  }
  // nor should random data behind a good signature
  for _ in 0..10 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(1024));
    let _ = parse_png(&v[..]);
  }
}

#[test]
fn test_png_files_fields() {
  let config = ParseConfig::new().with_verify_crc(true).with_strict_ancillary(true);

  let v = std::fs::read("tests/png_files/grey_1x1.png").unwrap();
  let png = PngContainer::from_reader_with(&v[..], &config).unwrap();
  assert_eq!((png.header().width, png.header().height), (1, 1));
  assert!(png.residual().is_empty());

  let v = std::fs::read("tests/png_files/rgba_4x4_text.png").unwrap();
  let mut png = PngContainer::from_reader_with(&v[..], &config).unwrap();
  assert_eq!(png.header().color_type, PngColorType::RGBA);
  assert_eq!(png.image_data().len(), 2);
  assert_eq!(png.gamma().map(|g| g.gamma), Some(45455));
  assert!(png.chromaticities().is_some());
  assert_eq!(png.physical_dimensions().map(|p| p.is_meters), Some(true));
  assert_eq!(png.modified().map(tIME::to_unix_seconds), Some(1_709_209_800));
  assert_eq!(png.texts()[0].text(), "Four by four");
  #[cfg(feature = "miniz_oxide")]
  assert_eq!(
    png.compressed_texts()[0].decompressed_text().unwrap(),
    "Stored compressed, read back on demand."
  );
  let srgb = FnDecoder::new(ChunkTag(*b"sRGB"), |raw: &RawChunk| match raw.data() {
    [intent] => Ok(*intent),
    other => Err(ParseError::WrongLength { expected: 1, actual: other.len() }),
  });
  assert_eq!(png.claim_all_custom(&srgb), Ok(1));
  assert!(png.residual().is_empty());

  let v = std::fs::read("tests/png_files/indexed_4bit_8x4.png").unwrap();
  let png = PngContainer::from_reader_with(&v[..], &config).unwrap();
  assert_eq!(png.header().color_type, PngColorType::Index);
  assert_eq!(png.palette().map(PLTE::len), Some(8));
  assert_eq!(png.histogram().map(hIST::len), Some(8));
  assert_eq!(png.transparency().map(tRNS::to_index_alphas), Some(vec![0, 255, 255, 128]));
  assert_eq!(png.background(), Some(&bKGD::Index { i: 3 }));
  assert_eq!(png.residual().tags().collect::<Vec<_>>(), [ChunkTag(*b"prVt")]);
}

#[test]
fn test_custom_decoder_end_to_end() {
  let mut chunks = minimal_chunks();
  chunks.insert(1, offs(10, -20));
  chunks.insert(3, offs(30, 40));
  let mut png = PngContainer::from_bytes(&png_from(&chunks)).unwrap();
  assert_eq!(png.residual().count(ChunkTag(*b"oFFs")), 2);

  assert_eq!(png.claim_all_custom(&OffsetDecoder), Ok(2));
  let offsets: Vec<Offset> =
    png.fallback().lookup_as::<Offset>(ChunkTag(*b"oFFs")).unwrap().iter().map(|o| **o).collect();
  assert_eq!(offsets, [Offset { x: 10, y: -20, unit: 0 }, Offset { x: 30, y: 40, unit: 0 }]);
  assert!(png.residual().is_empty());
}

#[test]
fn test_custom_claims_leave_known_fields_alone() {
  let mut chunks = minimal_chunks();
  chunks.insert(1, RawChunk::new(ChunkTag::gAMA, 45455_u32.to_be_bytes().to_vec()));
  chunks.insert(2, offs(1, 2));
  let mut png = PngContainer::from_bytes(&png_from(&chunks)).unwrap();
  let header = *png.header();
  let gamma = png.gamma().copied();
  let idat: Vec<Vec<u8>> = png.image_data_bytes().map(<[u8]>::to_vec).collect();

  // even a decoder for a known tag only ever sees the residual pool
  let grab_idat = FnDecoder::new(ChunkTag::IDAT, |raw: &RawChunk| Ok::<_, ParseError>(raw.bytes()));
  assert_eq!(png.claim_custom(&grab_idat, true), Err(ClaimError::NotFound(ChunkTag::IDAT)));
  assert_eq!(png.claim_custom(&OffsetDecoder, false), Ok(()));

  assert_eq!(*png.header(), header);
  assert_eq!(png.gamma().copied(), gamma);
  let idat_after: Vec<Vec<u8>> = png.image_data_bytes().map(<[u8]>::to_vec).collect();
  assert_eq!(idat_after, idat);
}

#[test]
fn test_concurrent_lookups_during_claims() {
  const N: i32 = 500;
  let mut chunks = minimal_chunks();
  let end = chunks.pop().unwrap();
  chunks.extend((0..N).map(|n| offs(n, -n)));
  chunks.push(end);
  let mut png = PngContainer::from_bytes(&png_from(&chunks)).unwrap();
  let store: Arc<FallbackStore> = png.fallback_handle();

  std::thread::scope(|s| {
    for _ in 0..3 {
      let store = Arc::clone(&store);
      s.spawn(move || loop {
        let seen = store.lookup_as::<Offset>(ChunkTag(*b"oFFs")).unwrap_or_default();
        for (n, offset) in seen.iter().enumerate() {
          assert_eq!(offset.x, n as i32);
          assert_eq!(offset.y, -(n as i32));
        }
        if seen.len() == N as usize {
          break;
        }
      });
    }
    assert_eq!(png.claim_all_custom(&OffsetDecoder), Ok(N as usize));
  });
  assert_eq!(store.count(ChunkTag(*b"oFFs")), N as usize);
}

#[test]
fn test_unclaimed_chunks_are_dropped_quietly() {
  let mut chunks = minimal_chunks();
  chunks.insert(1, RawChunk::new(ChunkTag(*b"prVt"), vec![1, 2, 3]));
  chunks.insert(2, offs(5, 5));
  let mut png = PngContainer::from_bytes(&png_from(&chunks)).unwrap();
  let residual: Vec<ChunkTag> = png.residual().tags().collect();
  assert_eq!(residual, [ChunkTag(*b"prVt"), ChunkTag(*b"oFFs")]);

  png.claim_custom(&OffsetDecoder, false).unwrap();
  // no decoder for prVt ever ran, so the store knows nothing about it
  assert!(!png.fallback().contains(ChunkTag(*b"prVt")));
  assert!(png.fallback().lookup(ChunkTag(*b"prVt")).is_none());
  assert_eq!(png.fallback().tags(), [ChunkTag(*b"oFFs")]);
  assert_eq!(png.residual().tags().collect::<Vec<_>>(), [ChunkTag(*b"prVt")]);
  drop(png);
}

#[test]
fn test_crc_values_from_the_wire() {
  let v = png_from(&minimal_chunks());
  let pool = segment_bytes(&v, &ParseConfig::new().with_verify_crc(true)).unwrap();
  assert!(pool.iter().all(RawChunk::crc_matches));
  let iend = pool.iter().last().unwrap();
  assert_eq!(iend.declared_crc(), 0xAE42_6082);
}
