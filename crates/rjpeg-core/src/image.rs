//! The owned image container
//!
//! [`ImageBuffer`] holds a fully materialized image: a contiguous,
//! row-major, channel-interleaved byte buffer plus its geometry and
//! encode-quality metadata.
//!
//! # Pixel layout
//!
//! - One byte per channel, 1 channel (gray) or 3 channels (RGB)
//! - Rows are packed with no padding: row stride is `width * channels`
//! - Buffer length is always exactly `width * height * channels`
//!
//! # Ownership model
//!
//! Transform operations never mutate their input; each produces a new
//! `ImageBuffer` and hands it to the caller with full ownership.

use crate::error::{Error, Result};

/// Quality reported for decoded images.
///
/// The source codec does not preserve the original encoder's quality
/// setting, so decoded images always report this fixed value.
pub const DEFAULT_QUALITY: u8 = 100;

/// An owned, contiguous pixel buffer with geometry and quality metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    gray: bool,
    quality: u8,
    pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a zero-filled image with the given geometry.
    ///
    /// Quality is initialized to [`DEFAULT_QUALITY`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rjpeg_core::ImageBuffer;
    ///
    /// let img = ImageBuffer::new(4, 3, false).unwrap();
    /// assert_eq!(img.channels(), 3);
    /// assert_eq!(img.pixels().len(), 4 * 3 * 3);
    /// ```
    pub fn new(width: u32, height: u32, gray: bool) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let channels = if gray { 1usize } else { 3usize };
        let len = width as usize * height as usize * channels;
        Ok(Self {
            width,
            height,
            gray,
            quality: DEFAULT_QUALITY,
            pixels: vec![0u8; len],
        })
    }

    /// Create an image from an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is 0, if `quality` is outside
    /// `1..=100`, or if `pixels.len()` does not equal
    /// `width * height * channels`.
    pub fn from_raw(
        width: u32,
        height: u32,
        gray: bool,
        quality: u8,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if quality == 0 || quality > 100 {
            return Err(Error::InvalidQuality(quality));
        }
        let channels = if gray { 1usize } else { 3usize };
        let expected = width as usize * height as usize * channels;
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            gray,
            quality,
            pixels,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of channels per pixel: 1 for gray, 3 for RGB.
    pub fn channels(&self) -> u32 {
        if self.gray { 1 } else { 3 }
    }

    /// Whether the image is single-channel grayscale.
    pub fn is_gray(&self) -> bool {
        self.gray
    }

    /// Encode quality in `1..=100`.
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Set the encode quality.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuality`] if `quality` is outside `1..=100`.
    pub fn set_quality(&mut self, quality: u8) -> Result<()> {
        if quality == 0 || quality > 100 {
            return Err(Error::InvalidQuality(quality));
        }
        self.quality = quality;
        Ok(())
    }

    /// Row stride in bytes (`width * channels`).
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels() as usize
    }

    /// The full pixel buffer, row-major and channel-interleaved.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// One full row of pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {} out of range (height {})", y, self.height);
        let stride = self.stride();
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    /// Mutable access to one full row of pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height, "row {} out of range (height {})", y, self.height);
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.pixels[start..start + stride]
    }

    /// The channel values of a single pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of range.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(x < self.width && y < self.height);
        let ch = self.channels() as usize;
        let start = (y as usize * self.width as usize + x as usize) * ch;
        &self.pixels[start..start + ch]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let img = ImageBuffer::new(3, 2, false).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.channels(), 3);
        assert_eq!(img.quality(), DEFAULT_QUALITY);
        assert_eq!(img.pixels().len(), 18);
        assert!(img.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(ImageBuffer::new(0, 10, false).is_err());
        assert!(ImageBuffer::new(10, 0, true).is_err());
    }

    #[test]
    fn test_from_raw_length_check() {
        // 2x2 gray needs 4 bytes
        assert!(ImageBuffer::from_raw(2, 2, true, 100, vec![0; 4]).is_ok());
        assert!(ImageBuffer::from_raw(2, 2, true, 100, vec![0; 3]).is_err());
        assert!(ImageBuffer::from_raw(2, 2, true, 100, vec![0; 5]).is_err());
        // 2x2 RGB needs 12 bytes
        assert!(ImageBuffer::from_raw(2, 2, false, 100, vec![0; 12]).is_ok());
    }

    #[test]
    fn test_from_raw_quality_check() {
        assert!(ImageBuffer::from_raw(1, 1, true, 0, vec![0]).is_err());
        assert!(ImageBuffer::from_raw(1, 1, true, 101, vec![0]).is_err());
        assert!(ImageBuffer::from_raw(1, 1, true, 1, vec![0]).is_ok());
    }

    #[test]
    fn test_set_quality() {
        let mut img = ImageBuffer::new(1, 1, true).unwrap();
        img.set_quality(80).unwrap();
        assert_eq!(img.quality(), 80);
        assert!(img.set_quality(0).is_err());
        assert!(img.set_quality(101).is_err());
        assert_eq!(img.quality(), 80);
    }

    #[test]
    fn test_row_and_pixel_access() {
        let pixels = vec![
            1, 2, 3, 4, 5, 6, // row 0: two RGB pixels
            7, 8, 9, 10, 11, 12, // row 1
        ];
        let img = ImageBuffer::from_raw(2, 2, false, 100, pixels).unwrap();
        assert_eq!(img.stride(), 6);
        assert_eq!(img.row(0), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(img.row(1), &[7, 8, 9, 10, 11, 12]);
        assert_eq!(img.pixel(1, 0), &[4, 5, 6]);
        assert_eq!(img.pixel(0, 1), &[7, 8, 9]);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let img = ImageBuffer::new(2, 2, true).unwrap();
        let _ = img.row(2);
    }
}
