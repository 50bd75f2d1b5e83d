//! The deflate stage wrapped around the raw band layout.
//!
//! Payloads use the zlib container so they interoperate with the usual `Deflater`/`Inflater`
//! style APIs at their default settings.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{GeoBandError, Result};

/// Compress a raw band layout.
pub(crate) fn deflate(raw: &[u8], level: Compression) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 2), level);
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Decompress a band payload into a growable buffer holding at most `max_len` bytes.
pub(crate) fn inflate(compressed: &[u8], max_len: usize) -> Result<Vec<u8>> {
    if compressed.is_empty() {
        return Err(GeoBandError::MalformedInput(
            "Missing compressed band payload".to_string(),
        ));
    }

    let mut raw = Vec::with_capacity(compressed.len().saturating_mul(4).min(max_len));
    // One byte past the limit distinguishes "exactly max_len" from "too large"
    let limit = (max_len as u64).saturating_add(1);
    ZlibDecoder::new(compressed)
        .take(limit)
        .read_to_end(&mut raw)
        .map_err(|err| {
            GeoBandError::MalformedInput(format!("Corrupt compressed band payload: {err}"))
        })?;

    if raw.len() > max_len {
        return Err(GeoBandError::MalformedInput(format!(
            "Decompressed band payload exceeds {max_len} bytes"
        )));
    }
    Ok(raw)
}
