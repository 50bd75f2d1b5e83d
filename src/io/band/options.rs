use flate2::Compression;

/// Default ceiling on the size of a decompressed band layout: 64 MiB.
pub const DEFAULT_MAX_DECODED_LEN: usize = 64 * 1024 * 1024;

/// Options for encoding and decoding drive-time bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandCodecOptions {
    /// The deflate level used when encoding. Decoding accepts any level.
    pub compression: Compression,

    /// The largest uncompressed layout, in bytes, that decoding will produce before rejecting
    /// the payload.
    pub max_decoded_len: usize,
}

impl BandCodecOptions {
    pub fn new(compression: Compression, max_decoded_len: usize) -> Self {
        Self {
            compression,
            max_decoded_len,
        }
    }

    pub fn with_compression(self, compression: Compression) -> Self {
        Self {
            compression,
            ..self
        }
    }

    pub fn with_max_decoded_len(self, max_decoded_len: usize) -> Self {
        Self {
            max_decoded_len,
            ..self
        }
    }
}

impl Default for BandCodecOptions {
    fn default() -> Self {
        Self::new(Compression::default(), DEFAULT_MAX_DECODED_LEN)
    }
}
