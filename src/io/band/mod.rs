//! Reading and writing the drive-time band format.
//!
//! A band is an ordered list of polygon rings stored as big-endian `i32`s: a header of magic
//! number, layout version and ring count, then per ring a coordinate count followed by
//! longitude/latitude pairs scaled by [`SCALE_FACTOR`] and truncated toward zero. The layout is
//! zlib-compressed and the result base64-encoded for the text interface.
//!
//! ```text
//! raw   := {magic:i32}{version:i32}{numRings:i32}{ring...}
//! ring  := {numCoords:i32}{coord...}
//! coord := {lon * 100000:i32}{lat * 100000:i32}
//! ```

mod api;
mod common;
mod compression;
mod options;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{decode, decode_polygon, encode, BandCodec};
pub use common::{FormatVersion, MAGIC, SCALE_FACTOR, SCALE_RESOLUTION};
pub use options::{BandCodecOptions, DEFAULT_MAX_DECODED_LEN};
pub use reader::read_band;
pub use writer::{band_size, write_band};
