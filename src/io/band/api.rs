use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use log::{debug, warn};

use crate::error::{GeoBandError, Result};
use crate::geo_traits::PolygonTrait;
use crate::geometry::{BandPath, BandPolygon};
use crate::io::band::compression::{deflate, inflate};
use crate::io::band::options::BandCodecOptions;
use crate::io::band::reader::read_band;
use crate::io::band::writer::band_to_vec;

/// Encoder and decoder for drive-time bands.
///
/// Holds no state besides its options, so a single codec can be shared freely across threads.
///
/// ```
/// use geoband::geometry::BandPolygon;
/// use geoband::io::band::BandCodec;
///
/// let band = BandPolygon::from(vec![vec![[-77.03, 38.89], [-77.01, 38.89], [-77.02, 38.91]]]);
/// let codec = BandCodec::default();
/// let encoded = codec.encode(&band).unwrap();
/// let decoded = codec.decode_polygon(&encoded).unwrap();
/// assert_eq!(decoded.rings()[0].len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandCodec {
    options: BandCodecOptions,
}

impl BandCodec {
    pub fn new(options: BandCodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BandCodecOptions {
        &self.options
    }

    /// Encode a polygon as base64 text.
    pub fn encode(&self, geom: &impl PolygonTrait<T = f64>) -> Result<String> {
        let compressed = self.encode_bytes(geom)?;
        Ok(BASE64_STANDARD.encode(compressed))
    }

    /// Encode a polygon as a compressed payload, skipping the base64 stage.
    pub fn encode_bytes(&self, geom: &impl PolygonTrait<T = f64>) -> Result<Vec<u8>> {
        let raw = band_to_vec(geom)?;
        let compressed = deflate(&raw, self.options.compression)?;
        debug!(
            "Encoded band with {} rings: {} raw bytes, {} compressed",
            geom.num_rings(),
            raw.len(),
            compressed.len()
        );
        Ok(compressed)
    }

    /// Decode base64 text produced by [`BandCodec::encode`].
    pub fn decode(&self, encoded: &str) -> Result<BandPath> {
        let compressed = BASE64_STANDARD.decode(encoded).map_err(|err| {
            warn!("Rejected band payload: {err}");
            GeoBandError::MalformedInput(format!("Invalid base64 band payload: {err}"))
        })?;
        self.decode_bytes(&compressed)
    }

    /// Decode a compressed payload produced by [`BandCodec::encode_bytes`].
    pub fn decode_bytes(&self, compressed: &[u8]) -> Result<BandPath> {
        inflate(compressed, self.options.max_decoded_len)
            .and_then(|raw| {
                let path = read_band(&raw)?;
                debug!(
                    "Decoded band with {} rings from {} compressed bytes, {} raw",
                    path.num_rings(),
                    compressed.len(),
                    raw.len()
                );
                Ok(path)
            })
            .map_err(|err| {
                warn!("Rejected band payload: {err}");
                err
            })
    }

    /// Decode base64 text straight into its rings.
    pub fn decode_polygon(&self, encoded: &str) -> Result<BandPolygon> {
        Ok(self.decode(encoded)?.to_polygon())
    }
}

/// Encode a polygon as base64 text with the default options.
pub fn encode(geom: &impl PolygonTrait<T = f64>) -> Result<String> {
    BandCodec::default().encode(geom)
}

/// Decode base64 text into the path that draws the band, with the default options.
pub fn decode(encoded: &str) -> Result<BandPath> {
    BandCodec::default().decode(encoded)
}

/// Decode base64 text into its rings, with the default options.
pub fn decode_polygon(encoded: &str) -> Result<BandPolygon> {
    BandCodec::default().decode_polygon(encoded)
}
