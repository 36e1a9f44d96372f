//! Holds all the tools for taking PNG data apart.
//!
//! * [Portable Network Graphics Specification (Third Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/png/
//!
//! ## Chunks
//!
//! After an 8 byte signature, a PNG is just a series of "chunks". Each chunk
//! is a big-endian `u32` length, a 4 byte [tag](ChunkTag), that many bytes of
//! data, and a CRC of the tag and data. The last chunk is always `IEND`.
//!
//! ## Decoding Stages
//!
//! 1) **Segmenting:** [`segment`] checks the signature and reads chunks until
//!    `IEND`, without looking at the data of any chunk. The chunks go into a
//!    [`ChunkPool`] in the order they were read.
//! 2) **Claiming:** a [`ChunkDecoder`] names a tag and parses chunk data.
//!    [`ChunkPool::claim`] gives the decoder the first unclaimed chunk with the
//!    matching tag and, if parsing works, removes that chunk from the pool.
//!    Repeatable kinds (like `IDAT`) are collected by claiming in a loop until
//!    [`ClaimError::NotFound`], which gives them in stream order.
//! 3) **Assembling:** [`assemble`] runs a fixed plan of claims for the chunk
//!    kinds this crate knows, which builds a [`PngContainer`]. The plan is
//!    `IHDR`, all `IDAT`, each optional ancillary kind once, all `tEXt` and
//!    `zTXt`, and then `IEND`. The position of a chunk within the stream doesn't
//!    matter to the plan.
//! 4) **Custom claims:** the chunks left over stay in the container's residual
//!    pool. Call [`PngContainer::claim_custom`] with your own decoder and the
//!    decoded values go into the container's [`FallbackStore`], which any
//!    number of threads can query by tag.
//!
//! Chunks that nobody claims are dropped along with the container, without
//! any warning. If you want to know about them, look at
//! [`PngContainer::residual`] first.
//!
//! ## Parsing Errors
//!
//! Structural problems (bad signature, truncation, no `IHDR`, no `IDAT`) are a
//! [`FormatError`] and stop the parse. An ancillary chunk that fails to parse
//! is skipped by default, see [`ParseConfig::strict_ancillary`]. CRC values are
//! only checked if you ask, see [`ParseConfig::verify_crc`].
//!
//! The image data is *not* decompressed or unfiltered here.

use core::fmt::Debug;
use std::io::Read;

use bytes::Bytes;

use crate::*;

mod crc32;
pub use crc32::*;

mod raw_chunk;
pub use raw_chunk::*;

mod segment;
pub use segment::*;

mod decoder;
pub use decoder::*;

mod pool;
pub use pool::*;

mod fallback;
pub use fallback::*;

mod assemble;
pub use assemble::*;

mod container;
pub use container::*;

mod ihdr;
pub use ihdr::*;

mod plte;
pub use plte::*;

mod idat;
pub use idat::*;

mod iend;
pub use iend::*;

mod bkgd;
pub use bkgd::*;

mod chrm;
pub use chrm::*;

mod gama;
pub use gama::*;

mod hist;
pub use hist::*;

mod phys;
pub use phys::*;

mod sbit;
pub use sbit::*;

mod trns;
pub use trns::*;

mod time;
pub use time::*;

mod text;
pub use text::*;

mod ztxt;
pub use ztxt::*;

#[cfg(test)]
mod tests;
