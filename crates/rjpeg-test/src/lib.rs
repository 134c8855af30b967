//! Test support for the rjpeg crates
//!
//! Provides [`RegParams`] for regression-style comparisons, synthetic
//! image builders, and mock codec implementations with call logging.

pub mod images;
pub mod mock;
pub mod params;

pub use images::{framed_gray, gradient_gray, gradient_rgb, uniform_gray, uniform_rgb};
pub use mock::{count_calls, CallLog, DecoderCall, EncoderCall, MockDecoder, MockEncoder};
pub use params::RegParams;
