//! Core image types shared across the rjpeg crates
//!
//! This crate defines the owned pixel container ([`ImageBuffer`]), the
//! shared error type, and luminance conversion. Pixel transforms live in
//! `rjpeg-transform`; the streaming codec adapter lives in `rjpeg-codec`.

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{ImageBuffer, DEFAULT_QUALITY};

/// Luminance conversion
///
/// Integer Rec. 601-style weights scaled to a 256 denominator, so the
/// conversion is a fixed-point multiply-accumulate with a final shift.
pub mod luma {
    /// Red weight (of 256).
    pub const WEIGHT_R: u32 = 77;
    /// Green weight (of 256).
    pub const WEIGHT_G: u32 = 150;
    /// Blue weight (of 256).
    pub const WEIGHT_B: u32 = 29;

    /// Weighted luminance of an RGB triple.
    ///
    /// Computes `(77*r + 150*g + 29*b) >> 8`. The weights sum to 256, so
    /// the result is always in `0..=255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rjpeg_core::luma::luma;
    ///
    /// assert_eq!(luma(255, 255, 255), 255);
    /// assert_eq!(luma(0, 0, 0), 0);
    /// ```
    #[inline]
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        ((WEIGHT_R * r as u32 + WEIGHT_G * g as u32 + WEIGHT_B * b as u32) >> 8) as u8
    }

}
