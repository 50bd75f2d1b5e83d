use geo::{Coord, CoordNum};

/// A trait for accessing data from a generic Coord.
pub trait CoordTrait {
    type T: CoordNum;

    /// x component of this coord
    fn x(&self) -> Self::T;

    /// y component of this coord
    fn y(&self) -> Self::T;
}

impl<C: CoordTrait> CoordTrait for &C {
    type T = C::T;

    fn x(&self) -> Self::T {
        (**self).x()
    }

    fn y(&self) -> Self::T {
        (**self).y()
    }
}

impl<T: CoordNum> CoordTrait for Coord<T> {
    type T = T;

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl<T: CoordNum> CoordTrait for (T, T) {
    type T = T;

    fn x(&self) -> Self::T {
        self.0
    }

    fn y(&self) -> Self::T {
        self.1
    }
}

impl<T: CoordNum> CoordTrait for [T; 2] {
    type T = T;

    fn x(&self) -> Self::T {
        self[0]
    }

    fn y(&self) -> Self::T {
        self[1]
    }
}
