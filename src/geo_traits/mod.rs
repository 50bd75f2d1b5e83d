//! Traits for accessing geometry data without copying it into the band representation.
//!
//! Anything implementing [`PolygonTrait`] with `f64` coordinates can be encoded directly.

pub use coord::CoordTrait;
pub use line_string::LineStringTrait;
pub use polygon::PolygonTrait;

mod coord;
mod line_string;
mod polygon;
