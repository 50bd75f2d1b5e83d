use geo::{CoordNum, LineString, Polygon};

use super::{CoordTrait, LineStringTrait};

/// A trait for accessing data from a generic Polygon as an ordered list of rings.
///
/// Ring `0` is the exterior ring of a simple polygon. Drive-time bands are not restricted to an
/// exterior plus holes: every ring is a boundary and order is significant.
pub trait PolygonTrait {
    type T: CoordNum;
    type RingType<'a>: 'a + LineStringTrait<T = Self::T>
    where
        Self: 'a;

    /// The number of rings in this Polygon
    fn num_rings(&self) -> usize;

    /// Access to a specified ring in this Polygon
    /// Will return None if the provided index is out of bounds
    fn ring(&self, i: usize) -> Option<Self::RingType<'_>>;

    /// An iterator over the rings in this Polygon, in order
    fn rings(&self) -> impl Iterator<Item = Self::RingType<'_>> {
        (0..self.num_rings()).filter_map(move |i| self.ring(i))
    }
}

impl<T: CoordNum> PolygonTrait for Polygon<T> {
    type T = T;
    type RingType<'a> = &'a LineString<T> where Self: 'a;

    fn num_rings(&self) -> usize {
        1 + self.interiors().len()
    }

    fn ring(&self, i: usize) -> Option<Self::RingType<'_>> {
        match i {
            0 => Some(self.exterior()),
            _ => self.interiors().get(i - 1),
        }
    }
}

/// Nested coordinate lists, such as `Vec<Vec<[f64; 2]>>`, one inner list per ring.
impl<C: CoordTrait> PolygonTrait for Vec<Vec<C>> {
    type T = C::T;
    type RingType<'a> = &'a [C] where Self: 'a;

    fn num_rings(&self) -> usize {
        self.len()
    }

    fn ring(&self, i: usize) -> Option<Self::RingType<'_>> {
        self.get(i).map(Vec::as_slice)
    }
}
