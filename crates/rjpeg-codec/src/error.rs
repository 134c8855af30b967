//! Error types for the streaming codec layer
//!
//! Codec failures carry a numeric code plus a detail message. A static
//! table maps known codes to named kinds; codes outside it fall through
//! to [`CodecErrorKind::Unknown`].

use thiserror::Error;

/// Numeric codes assigned to codec failure classes.
pub mod codes {
    /// The stream did not contain a parseable image header.
    pub const BAD_HEADER: i32 = 10;
    /// The stream uses a feature the codec cannot handle.
    pub const UNSUPPORTED_FEATURE: i32 = 11;
    /// The source ended before the full image was decoded.
    pub const TOO_LITTLE_DATA: i32 = 12;
    /// An underlying I/O operation failed.
    pub const IO: i32 = 13;
    /// The codec reported an internal defect.
    pub const INTERNAL: i32 = 14;
}

/// Named classification of a codec failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecErrorKind {
    BadHeader,
    UnsupportedFeature,
    InsufficientData,
    Io,
    Internal,
    /// A code not present in the lookup table.
    Unknown,
}

/// Lookup table from numeric code to kind. Built once, never mutated.
const KIND_TABLE: &[(i32, CodecErrorKind)] = &[
    (codes::BAD_HEADER, CodecErrorKind::BadHeader),
    (codes::UNSUPPORTED_FEATURE, CodecErrorKind::UnsupportedFeature),
    (codes::TOO_LITTLE_DATA, CodecErrorKind::InsufficientData),
    (codes::IO, CodecErrorKind::Io),
    (codes::INTERNAL, CodecErrorKind::Internal),
];

/// A failure reported by the underlying codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("codec error {code}: {detail}")]
pub struct CodecError {
    code: i32,
    detail: String,
}

impl CodecError {
    pub fn new(code: i32, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    /// The codec's numeric failure code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Human-readable failure detail.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// The named kind for this code, or [`CodecErrorKind::Unknown`].
    pub fn kind(&self) -> CodecErrorKind {
        KIND_TABLE
            .iter()
            .find(|(code, _)| *code == self.code)
            .map(|(_, kind)| *kind)
            .unwrap_or(CodecErrorKind::Unknown)
    }

    /// Whether this failure means the source ran out of data.
    ///
    /// Callers may treat this variant as a soft end-of-stream instead of
    /// a hard failure.
    pub fn is_insufficient_data(&self) -> bool {
        self.kind() == CodecErrorKind::InsufficientData
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors surfaced by [`StreamReader`] and [`StreamWriter`].
///
/// [`StreamReader`]: crate::StreamReader
/// [`StreamWriter`]: crate::StreamWriter
#[derive(Error, Debug)]
pub enum StreamError {
    /// Caller-supplied parameter out of contract.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An operation required an open decode or encode in progress.
    #[error("stream is not open")]
    NotOpen,

    /// A supplied scanline was shorter than one full row.
    #[error("too short data passed: required {required} bytes, got {actual}")]
    TooShortData { required: usize, actual: usize },

    /// The underlying codec failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Error from the core image types.
    #[error("core error: {0}")]
    Core(#[from] rjpeg_core::Error),
}

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;
