use geo::{Coord, CoordNum, LineString};

use super::CoordTrait;

/// A trait for accessing data from a generic LineString, such as a single polygon ring.
pub trait LineStringTrait {
    type T: CoordNum;
    type ItemType<'a>: 'a + CoordTrait<T = Self::T>
    where
        Self: 'a;

    /// The number of coordinates in this LineString
    fn num_coords(&self) -> usize;

    /// Access to a specified coordinate in this LineString
    /// Will return None if the provided index is out of bounds
    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>>;

    /// An iterator over the coordinates in this LineString
    fn coords(&self) -> impl Iterator<Item = Self::ItemType<'_>> {
        (0..self.num_coords()).filter_map(move |i| self.coord(i))
    }
}

impl<T: CoordNum> LineStringTrait for LineString<T> {
    type T = T;
    type ItemType<'a> = &'a Coord<T> where Self: 'a;

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)
    }
}

impl<'a, T: CoordNum> LineStringTrait for &'a LineString<T> {
    type T = T;
    type ItemType<'b> = &'a Coord<T> where Self: 'b;

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>> {
        let line_string: &'a LineString<T> = *self;
        line_string.0.get(i)
    }
}

impl<'a, C: CoordTrait> LineStringTrait for &'a [C] {
    type T = C::T;
    type ItemType<'b> = &'a C where Self: 'b;

    fn num_coords(&self) -> usize {
        self.len()
    }

    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>> {
        let coords: &'a [C] = *self;
        coords.get(i)
    }
}
