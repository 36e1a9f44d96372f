use pngclaim::{png::*, *};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let srgb = FnDecoder::new(ChunkTag(*b"sRGB"), |raw: &RawChunk| match raw.data() {
    [intent @ 0..=3] => Ok(*intent),
    [intent] => Err(ParseError::InvalidValue { field: "rendering intent", value: u32::from(*intent) }),
    other => Err(ParseError::WrongLength { expected: 1, actual: other.len() }),
  });

  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    let mut png = match PngContainer::from_bytes(&bytes) {
      Ok(png) => png,
      Err(e) => {
        println!("{e}");
        continue;
      }
    };
    println!("{:?}", png.header());
    println!("IDAT: {} chunks", png.image_data().len());
    for text in png.texts() {
      println!("tEXt: {text:?}");
    }
    for (tag, e) in png.skipped() {
      println!("skipped {tag}: {e}");
    }
    match png.claim_custom(&srgb, true) {
      Ok(()) => println!("sRGB: {:?}", png.fallback().lookup_as::<u8>(ChunkTag(*b"sRGB"))),
      Err(ClaimError::NotFound(_)) => (),
      Err(e) => println!("{e}"),
    }
    let residual: Vec<ChunkTag> = png.residual().tags().collect();
    println!("Unclaimed: {residual:?}");
  }
}
