//! A compact binary codec for drive-time band polygons.
//!
//! A drive-time band is the area reachable from a facility within some driving time, stored as
//! an ordered list of polygon rings. This crate encodes those rings into a fixed-point,
//! deflate-compressed, base64 string and decodes them back into a drawable path.
//!
//! ```
//! use geoband::geometry::BandPolygon;
//!
//! let band = BandPolygon::from(vec![vec![[1.111, -1.111], [1.111, -4.444], [4.444, -4.444]]]);
//! let encoded = geoband::encode(&band).unwrap();
//! let path = geoband::decode(&encoded).unwrap();
//! assert_eq!(path.num_rings(), 1);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{GeoBandError, Result};
pub use io::band::{decode, decode_polygon, encode, BandCodec, BandCodecOptions};

pub mod error;
pub mod geo_traits;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
