use geo::{LineString, Polygon};
use serde::{Deserialize, Serialize};

use crate::geo_traits::{LineStringTrait, PolygonTrait};
use crate::geometry::Coordinate;

/// One closed boundary of a drive-time band.
///
/// Serializes as a list of `[lon, lat]` positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandRing(Vec<Coordinate>);

impl BandRing {
    pub fn new(coords: Vec<Coordinate>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, coord: Coordinate) {
        self.0.push(coord)
    }

    pub fn into_inner(self) -> Vec<Coordinate> {
        self.0
    }
}

impl LineStringTrait for BandRing {
    type T = f64;
    type ItemType<'a> = &'a Coordinate where Self: 'a;

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)
    }
}

impl<'a> LineStringTrait for &'a BandRing {
    type T = f64;
    type ItemType<'b> = &'a Coordinate where Self: 'b;

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>> {
        let ring: &'a BandRing = *self;
        ring.0.get(i)
    }
}

impl<C: Into<Coordinate>> From<Vec<C>> for BandRing {
    fn from(value: Vec<C>) -> Self {
        Self(value.into_iter().map(Into::into).collect())
    }
}

impl From<&LineString<f64>> for BandRing {
    fn from(value: &LineString<f64>) -> Self {
        Self(value.0.iter().map(|c| Coordinate::from(*c)).collect())
    }
}

impl From<BandRing> for LineString<f64> {
    fn from(value: BandRing) -> Self {
        LineString::new(value.0.into_iter().map(Into::into).collect())
    }
}

/// An ordered list of rings describing a drive-time band.
///
/// Serializes with the nesting of a GeoJSON polygon's `coordinates` member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandPolygon(Vec<BandRing>);

impl BandPolygon {
    pub fn new(rings: Vec<BandRing>) -> Self {
        Self(rings)
    }

    pub fn rings(&self) -> &[BandRing] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, ring: BandRing) {
        self.0.push(ring)
    }

    pub fn into_inner(self) -> Vec<BandRing> {
        self.0
    }
}

impl PolygonTrait for BandPolygon {
    type T = f64;
    type RingType<'a> = &'a BandRing where Self: 'a;

    fn num_rings(&self) -> usize {
        self.0.len()
    }

    fn ring(&self, i: usize) -> Option<Self::RingType<'_>> {
        self.0.get(i)
    }
}

impl From<Vec<BandRing>> for BandPolygon {
    fn from(value: Vec<BandRing>) -> Self {
        Self(value)
    }
}

impl From<Vec<Vec<[f64; 2]>>> for BandPolygon {
    fn from(value: Vec<Vec<[f64; 2]>>) -> Self {
        Self(value.into_iter().map(BandRing::from).collect())
    }
}

impl From<&Polygon<f64>> for BandPolygon {
    fn from(value: &Polygon<f64>) -> Self {
        Self(PolygonTrait::rings(value).map(BandRing::from).collect())
    }
}

impl From<Polygon<f64>> for BandPolygon {
    fn from(value: Polygon<f64>) -> Self {
        (&value).into()
    }
}

/// The first ring becomes the exterior, the remaining rings become interiors.
///
/// Note that [`Polygon::new`] closes any ring whose first and last coordinates differ.
impl From<BandPolygon> for Polygon<f64> {
    fn from(value: BandPolygon) -> Self {
        let mut rings = value.0.into_iter().map(LineString::from);
        let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
        Polygon::new(exterior, rings.collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::band::{nested_band, two_ring_band};

    #[test]
    fn serializes_as_geojson_coordinates() {
        let band = BandPolygon::from(vec![vec![[1.5, -2.0], [3.0, 4.25]]]);
        let json = serde_json::to_string(&band).unwrap();
        assert_eq!(json, "[[[1.5,-2.0],[3.0,4.25]]]");

        let parsed: BandPolygon = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, band);
    }

    #[test]
    fn geo_polygon_conversion_keeps_ring_order() {
        let band = nested_band();
        let polygon: Polygon<f64> = band.clone().into();
        assert_eq!(polygon.interiors().len(), 1);
        assert_eq!(BandPolygon::from(&polygon), band);
    }

    #[test]
    fn trait_access_matches_storage() {
        let band = two_ring_band();
        assert_eq!(band.num_rings(), 2);
        let ring = band.ring(1).unwrap();
        assert_eq!(ring.num_coords(), 6);
        assert_eq!(ring.coord(0), Some(&Coordinate::new(10.111, -10.111)));
        assert!(ring.coord(6).is_none());
        assert!(band.ring(2).is_none());
    }
}
