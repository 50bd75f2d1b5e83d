//! The geometry types of a drive-time band: coordinates, rings, polygons and decoded paths.

pub use coord::Coordinate;
pub use path::{BandPath, PathCommand};
pub use polygon::{BandPolygon, BandRing};

mod coord;
mod path;
mod polygon;
