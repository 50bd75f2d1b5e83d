use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{GeoBandError, Result};
use crate::geo_traits::{CoordTrait, LineStringTrait, PolygonTrait};
use crate::io::band::common::{scale, FormatVersion, INT_SIZE, MAGIC};

/// The byte length of the uncompressed band layout of `geom`.
pub fn band_size(geom: &impl PolygonTrait<T = f64>) -> usize {
    // magic, version, numRings
    let mut sum = 3 * INT_SIZE;
    for ring in geom.rings() {
        // numCoords, then a scaled lon/lat pair per coordinate
        sum += INT_SIZE + ring.num_coords() * 2 * INT_SIZE;
    }
    sum
}

fn layout_count(count: usize, what: impl FnOnce() -> String) -> Result<i32> {
    if count == 0 {
        return Err(GeoBandError::InvalidGeometry(format!("{}: 0", what())));
    }
    i32::try_from(count)
        .map_err(|_| GeoBandError::InvalidGeometry(format!("{}: {count} overflows", what())))
}

/// Check that `geom` can be written without producing an empty or lossy layout.
fn validate_band(geom: &impl PolygonTrait<T = f64>) -> Result<()> {
    layout_count(geom.num_rings(), || "Number of rings".to_string())?;
    for (ring_idx, ring) in geom.rings().enumerate() {
        layout_count(ring.num_coords(), || {
            format!("Number of coordinates for ring {ring_idx}")
        })?;
        for coord in ring.coords() {
            scale(coord.x())?;
            scale(coord.y())?;
        }
    }
    Ok(())
}

/// Write a polygon to a Writer encoded as an uncompressed band layout.
///
/// The geometry is validated before anything is written: it must have at least one ring, every
/// ring must have at least one coordinate and every component must be finite and fit the
/// fixed-point range.
pub fn write_band<W: Write>(mut writer: W, geom: &impl PolygonTrait<T = f64>) -> Result<()> {
    validate_band(geom)?;

    writer.write_i32::<BigEndian>(MAGIC)?;
    writer.write_i32::<BigEndian>(FormatVersion::CURRENT.into())?;

    // numRings
    writer.write_i32::<BigEndian>(layout_count(geom.num_rings(), || {
        "Number of rings".to_string()
    })?)?;

    for (ring_idx, ring) in geom.rings().enumerate() {
        writer.write_i32::<BigEndian>(layout_count(ring.num_coords(), || {
            format!("Number of coordinates for ring {ring_idx}")
        })?)?;

        for coord in ring.coords() {
            writer.write_i32::<BigEndian>(scale(coord.x())?)?;
            writer.write_i32::<BigEndian>(scale(coord.y())?)?;
        }
    }

    Ok(())
}

/// Encode a polygon into a freshly allocated uncompressed band layout.
pub(crate) fn band_to_vec(geom: &impl PolygonTrait<T = f64>) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(band_size(geom));
    write_band(&mut buf, geom)?;
    Ok(buf)
}

#[cfg(test)]
mod test {
    use geo::polygon;

    use super::*;
    use crate::geometry::BandPolygon;
    use crate::test::band::{single_point_band, two_ring_band};

    #[test]
    fn single_point_layout() {
        let buf = band_to_vec(&single_point_band()).unwrap();
        #[rustfmt::skip]
        let expected: [u8; 24] = [
            0x44, 0x54, 0x42, 0x44, // magic
            0x00, 0x00, 0x00, 0x01, // version
            0x00, 0x00, 0x00, 0x01, // numRings
            0x00, 0x00, 0x00, 0x01, // numCoords
            0x00, 0x01, 0x86, 0xA0, // 1.0
            0x00, 0x03, 0x0D, 0x40, // 2.0
        ];
        assert_eq!(buf, expected);
        assert_eq!(band_size(&single_point_band()), 24);
    }

    #[test]
    fn size_matches_written_length() {
        let band = two_ring_band();
        let buf = band_to_vec(&band).unwrap();
        assert_eq!(buf.len(), band_size(&band));
        assert_eq!(buf.len(), 12 + 2 * (4 + 6 * 8));
    }

    #[test]
    fn geo_polygon_layout() {
        let polygon = polygon![
            (x: 0.0, y: 0.0),
            (x: 4.0, y: 0.0),
            (x: 4.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        let from_geo = band_to_vec(&polygon).unwrap();
        let from_band = band_to_vec(&BandPolygon::from(&polygon)).unwrap();
        assert_eq!(from_geo, from_band);
    }

    #[test]
    fn nested_vec_layout() {
        let expected = band_to_vec(&single_point_band()).unwrap();
        let arrays: Vec<Vec<[f64; 2]>> = vec![vec![[1.0, 2.0]]];
        let tuples: Vec<Vec<(f64, f64)>> = vec![vec![(1.0, 2.0)]];
        assert_eq!(band_to_vec(&arrays).unwrap(), expected);
        assert_eq!(band_to_vec(&tuples).unwrap(), expected);

        let empty_ring: Vec<Vec<[f64; 2]>> = vec![vec![[1.0, 2.0]], vec![]];
        assert!(band_to_vec(&empty_ring).is_err());
    }

    #[test]
    fn rejects_empty_polygon() {
        let mut buf = vec![];
        let err = write_band(&mut buf, &BandPolygon::default()).unwrap_err();
        assert!(matches!(err, GeoBandError::InvalidGeometry(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn rejects_empty_ring() {
        let band = BandPolygon::from(vec![vec![[1.0, 2.0]], vec![]]);
        let mut buf = vec![];
        let err = write_band(&mut buf, &band).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid band geometry: Number of coordinates for ring 1: 0"
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn rejects_non_finite() {
        let band = BandPolygon::from(vec![vec![[1.0, 2.0], [f64::NAN, 2.0]]]);
        let mut buf = vec![];
        assert!(write_band(&mut buf, &band).is_err());
        assert!(buf.is_empty());
    }
}
