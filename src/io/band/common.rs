use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{GeoBandError, Result};

/// Sentinel opening every band layout, `"DTBD"` in ASCII.
pub const MAGIC: i32 = 0x4454_4244;

/// Fixed-point scale applied to every coordinate component.
pub const SCALE_FACTOR: f64 = 100_000.0;

/// The smallest difference between two distinct decoded coordinate components.
pub const SCALE_RESOLUTION: f64 = 1.0 / SCALE_FACTOR;

/// Byte length of a single layout integer.
pub(crate) const INT_SIZE: usize = 4;

/// Versions of the band layout.
///
/// Decoding dispatches on this value; each version keeps its own reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum FormatVersion {
    /// Big-endian `i32` counts followed by fixed-point `i32` coordinate pairs.
    V1 = 1,
}

impl FormatVersion {
    /// The version written by this crate's encoder.
    pub const CURRENT: FormatVersion = FormatVersion::V1;
}

/// Scale a coordinate component to its fixed-point representation, truncating toward zero.
pub(crate) fn scale(value: f64) -> Result<i32> {
    if !value.is_finite() {
        return Err(GeoBandError::InvalidGeometry(format!(
            "Coordinate component is not finite: {value}"
        )));
    }
    let scaled = (value * SCALE_FACTOR).trunc();
    if scaled < i32::MIN as f64 || scaled > i32::MAX as f64 {
        return Err(GeoBandError::InvalidGeometry(format!(
            "Coordinate component out of range: {value}"
        )));
    }
    Ok(scaled as i32)
}

pub(crate) fn unscale(value: i32) -> f64 {
    value as f64 / SCALE_FACTOR
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scale_truncates_toward_zero() {
        assert_eq!(scale(1.234_567).unwrap(), 123_456);
        assert_eq!(scale(-1.234_567).unwrap(), -123_456);
        assert_eq!(scale(0.0).unwrap(), 0);
        assert_eq!(scale(180.0).unwrap(), 18_000_000);
    }

    #[test]
    fn scale_rejects_unrepresentable() {
        assert!(scale(f64::NAN).is_err());
        assert!(scale(f64::INFINITY).is_err());
        assert!(scale(1e9).is_err());
        assert!(scale(-1e9).is_err());
    }

    #[test]
    fn unscale_divides() {
        assert_eq!(unscale(18_000_000), 180.0);
        assert_eq!(unscale(-9_000_000), -90.0);
    }

    #[test]
    fn version_from_primitive() {
        assert_eq!(FormatVersion::try_from(1i32).unwrap(), FormatVersion::V1);
        assert!(FormatVersion::try_from(2i32).is_err());
        assert_eq!(i32::from(FormatVersion::CURRENT), 1);
    }
}
