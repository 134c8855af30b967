//! Pixel transforms over [`ImageBuffer`]
//!
//! Pure operations: resampling ([`resize`]), tone adjustment
//! ([`auto_contrast`], [`level`]), color reduction ([`grayscale`]), and
//! cropping ([`crop`], [`crop_to_content`]). Each takes an image by
//! reference and returns a new one.
//!
//! [`ImageBuffer`]: rjpeg_core::ImageBuffer

pub mod crop;
pub mod enhance;
pub mod error;
pub mod resample;

pub use crop::{crop, crop_to_content};
pub use enhance::{auto_contrast, grayscale, level};
pub use error::{TransformError, TransformResult};
pub use resample::{resize, ResampleKernel};
