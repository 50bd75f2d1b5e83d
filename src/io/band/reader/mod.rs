//! Readers for the uncompressed band layout.
//!
//! The header is shared by every layout version. Everything after the version field belongs to
//! that version's reader; adding a version means adding a module, not changing an existing one.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};
use log::warn;
use num_enum::TryFromPrimitive;

use crate::error::{GeoBandError, Result};
use crate::geometry::BandPath;
use crate::io::band::common::{FormatVersion, MAGIC};

mod v1;

/// Read one big-endian layout integer, reporting truncation as malformed input.
pub(crate) fn read_int(reader: &mut Cursor<&[u8]>, what: &str) -> Result<i32> {
    reader.read_i32::<BigEndian>().map_err(|_| {
        GeoBandError::MalformedInput(format!("Truncated band layout while reading {what}"))
    })
}

/// The number of unread bytes left in the layout.
pub(crate) fn remaining(reader: &Cursor<&[u8]>) -> usize {
    let len = reader.get_ref().len() as u64;
    len.saturating_sub(reader.position()) as usize
}

/// Decode an uncompressed band layout into the path that draws it.
pub fn read_band(buf: &[u8]) -> Result<BandPath> {
    let mut reader = Cursor::new(buf);

    let magic = read_int(&mut reader, "magic number")?;
    if magic != MAGIC {
        return Err(GeoBandError::MalformedInput(format!(
            "Unknown magic number: {magic:#010x}"
        )));
    }

    let version = read_int(&mut reader, "version")?;
    let version = FormatVersion::try_from_primitive(version)
        .map_err(|_| GeoBandError::MalformedInput(format!("Unsupported version: {version}")))?;

    let path = match version {
        FormatVersion::V1 => v1::read_rings(&mut reader)?,
    };

    let trailing = remaining(&reader);
    if trailing > 0 {
        warn!("Ignoring {trailing} trailing bytes after {version:?} band layout");
    }

    Ok(path)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{Coordinate, PathCommand};
    use crate::io::band::writer::band_to_vec;
    use crate::test::band::{raw_layout, two_ring_band};
    use crate::test::init_logger;

    fn malformed_reason(buf: &[u8]) -> String {
        init_logger();
        match read_band(buf).unwrap_err() {
            GeoBandError::MalformedInput(reason) => reason,
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn reads_written_layout() {
        let buf = band_to_vec(&two_ring_band()).unwrap();
        let path = read_band(&buf).unwrap();
        assert_eq!(path.num_rings(), 2);
        assert_eq!(path.len(), 14);
    }

    #[test]
    fn reads_hand_built_layout() {
        let buf = raw_layout(&[MAGIC, 1, 1, 2, 100_000, 200_000, -50_000, 0]);
        let path = read_band(&buf).unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Coordinate::new(1.0, 2.0)),
                PathCommand::LineTo(Coordinate::new(-0.5, 0.0)),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn rejects_wrong_magic() {
        let buf = raw_layout(&[0x1234_5678, 1, 1, 1, 0, 0]);
        assert_eq!(malformed_reason(&buf), "Unknown magic number: 0x12345678");
    }

    #[test]
    fn rejects_unknown_version() {
        let buf = raw_layout(&[MAGIC, 2, 1, 1, 0, 0]);
        assert_eq!(malformed_reason(&buf), "Unsupported version: 2");
    }

    #[test]
    fn rejects_zero_rings() {
        let buf = raw_layout(&[MAGIC, 1, 0]);
        assert_eq!(malformed_reason(&buf), "Number of rings: 0");
    }

    #[test]
    fn rejects_negative_rings() {
        let buf = raw_layout(&[MAGIC, 1, -3, 1, 0, 0]);
        assert_eq!(malformed_reason(&buf), "Number of rings: -3");
    }

    #[test]
    fn rejects_zero_coordinates() {
        let buf = raw_layout(&[MAGIC, 1, 2, 1, 0, 0, 0, 0, 0]);
        assert_eq!(
            malformed_reason(&buf),
            "Number of coordinates for ring 1: 0"
        );
    }

    #[test]
    fn rejects_negative_coordinates() {
        let buf = raw_layout(&[MAGIC, 1, 1, -2, 0, 0]);
        assert_eq!(
            malformed_reason(&buf),
            "Number of coordinates for ring 0: -2"
        );
    }

    #[test]
    fn rejects_truncated_layout() {
        assert!(read_band(&[]).is_err());
        assert!(read_band(&[0x44, 0x54]).is_err());

        let buf = raw_layout(&[MAGIC, 1, 1, 3, 0, 0, 1, 1]);
        assert!(malformed_reason(&buf).starts_with("Number of coordinates for ring 0: 3"));
    }

    #[test]
    fn rejects_ring_count_beyond_payload() {
        let buf = raw_layout(&[MAGIC, 1, i32::MAX, 1, 0, 0]);
        assert!(read_band(&buf).unwrap_err().is_malformed_input());
    }

    #[test]
    fn ignores_trailing_bytes() {
        init_logger();
        let mut buf = raw_layout(&[MAGIC, 1, 1, 1, 0, 0]);
        buf.extend_from_slice(&[0xff; 3]);
        assert_eq!(read_band(&buf).unwrap().len(), 2);
    }
}
