#![cfg_attr(docs_rs, feature(doc_cfg))]
#![forbid(unsafe_code)]

//! A crate for taking PNG data apart chunk by chunk.
//!
//! The PNG datastream is first split into raw chunks, which go into a
//! [`ChunkPool`](png::ChunkPool). Decoders then *claim* chunks out of the pool:
//! each claim finds the first unclaimed chunk with the decoder's tag, parses
//! it, and removes it. A chunk can be claimed at most once.
//!
//! All the chunk kinds that the PNG spec defines as critical, plus the common
//! ancillary kinds, are claimed automatically when you build a
//! [`PngContainer`](png::PngContainer). Anything left over can be claimed
//! later with your own [`ChunkDecoder`](png::ChunkDecoder), and the results are
//! kept in a thread-safe [`FallbackStore`](png::FallbackStore).
//!
//! ```no_run
//! use pngclaim::{png::*, *};
//! let bytes: &[u8] = unimplemented!("data from somewhere");
//! let mut png = PngContainer::from_bytes(bytes)?;
//! println!("{}x{}", png.header().width, png.header().height);
//!
//! let srgb = FnDecoder::new(ChunkTag(*b"sRGB"), |raw: &RawChunk| match raw.data() {
//!   [intent] => Ok(*intent),
//!   _ => Err(ParseError::WrongLength { expected: 1, actual: raw.data().len() }),
//! });
//! let _ = png.claim_custom(&srgb, true);
//! let intents = png.fallback().lookup_as::<u8>(ChunkTag(*b"sRGB"));
//! # Ok::<(), pngclaim::PngError>(())
//! ```

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod tag;
pub use tag::*;

pub mod error;
pub use error::*;

pub mod config;
pub use config::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod png;
