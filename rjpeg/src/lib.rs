//! rjpeg - JPEG streaming codec adapter and pixel transforms
//!
//! # Overview
//!
//! rjpeg provides:
//!
//! - Full-buffer JPEG decode and encode ([`codec::read`], [`codec::write`])
//! - Streaming scanline access ([`codec::StreamReader`], [`codec::StreamWriter`])
//! - Resampling (bilinear, bicubic)
//! - Contrast enhancement (auto-contrast, level adjustment)
//! - Grayscale conversion and uniform-border cropping
//!
//! # Example
//!
//! ```
//! use rjpeg::ImageBuffer;
//! use rjpeg::transform::{resize, ResampleKernel};
//!
//! let img = ImageBuffer::new(640, 480, false).unwrap();
//! let half = resize(&img, 320, 240, ResampleKernel::Bilinear).unwrap();
//! assert_eq!(half.width(), 320);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rjpeg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rjpeg_codec as codec;
pub use rjpeg_transform as transform;
