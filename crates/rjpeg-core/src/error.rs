//! Error types for rjpeg-core
//!
//! Provides a unified error type for image buffer construction and
//! validation. Each variant captures enough context for diagnostics
//! without exposing internal implementation details.

use thiserror::Error;

/// rjpeg-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the declared geometry
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Quality outside the encodable range
    #[error("invalid quality: {0} (must be in 1..=100)")]
    InvalidQuality(u8),
}

/// Result type alias for rjpeg-core operations
pub type Result<T> = std::result::Result<T, Error>;
