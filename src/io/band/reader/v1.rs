use std::io::Cursor;

use log::trace;

use crate::error::{GeoBandError, Result};
use crate::geometry::{BandPath, Coordinate};
use crate::io::band::common::{unscale, INT_SIZE};
use crate::io::band::reader::{read_int, remaining};

/// Byte length of one scaled lon/lat pair.
const COORD_SIZE: usize = 2 * INT_SIZE;

/// Read the version 1 ring section, positioned just after the version field.
///
/// ```text
/// {numRings:i32}{ring...}
/// ring := {numCoords:i32}{lon:i32 lat:i32}...
/// ```
pub(super) fn read_rings(reader: &mut Cursor<&[u8]>) -> Result<BandPath> {
    let num_rings = read_int(reader, "number of rings")?;
    if num_rings <= 0 {
        return Err(GeoBandError::MalformedInput(format!(
            "Number of rings: {num_rings}"
        )));
    }

    // Each ring holds at least its count and one coordinate
    let num_rings = num_rings as usize;
    if num_rings > remaining(reader) / (INT_SIZE + COORD_SIZE) {
        return Err(GeoBandError::MalformedInput(format!(
            "Number of rings: {num_rings} exceeds payload"
        )));
    }

    let mut path = BandPath::with_capacity(remaining(reader) / COORD_SIZE + num_rings);
    for ring_idx in 0..num_rings {
        let num_coords = read_int(reader, "number of coordinates")?;
        if num_coords <= 0 {
            return Err(GeoBandError::MalformedInput(format!(
                "Number of coordinates for ring {ring_idx}: {num_coords}"
            )));
        }

        let num_coords = num_coords as usize;
        if num_coords > remaining(reader) / COORD_SIZE {
            return Err(GeoBandError::MalformedInput(format!(
                "Number of coordinates for ring {ring_idx}: {num_coords} exceeds payload"
            )));
        }
        trace!("Reading ring {ring_idx} with {num_coords} coordinates");

        for coord_idx in 0..num_coords {
            let lon = unscale(read_int(reader, "longitude")?);
            let lat = unscale(read_int(reader, "latitude")?);
            let coord = Coordinate::new(lon, lat);
            if coord_idx == 0 {
                path.move_to(coord);
            } else {
                path.line_to(coord);
            }
        }
        path.close();
    }

    Ok(path)
}
