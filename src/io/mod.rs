//! Readers and writers for the encoded forms of drive-time bands.

pub mod band;
