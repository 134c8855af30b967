//! Error types for transform operations

use thiserror::Error;

/// Errors that can occur during pixel transforms.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Error from the core image types.
    #[error("core error: {0}")]
    Core(#[from] rjpeg_core::Error),

    /// Invalid parameters passed to a transform.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;
