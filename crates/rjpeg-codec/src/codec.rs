//! Codec collaborator traits
//!
//! [`StreamReader`] and [`StreamWriter`] drive these traits without any
//! knowledge of the bitstream. The JPEG adapters in [`crate::jpeg`]
//! implement them; tests substitute mocks.
//!
//! Call order is fixed. Decoders: `read_header`, `start`, one
//! `read_scanline` per row in increasing order, then `finish`. Encoders:
//! `start`, one `write_scanline` per declared row, then `finish`. The
//! stream wrappers enforce this ordering so implementations may assume it.
//!
//! [`StreamReader`]: crate::StreamReader
//! [`StreamWriter`]: crate::StreamWriter

use crate::error::CodecResult;

/// Image geometry parsed from the stream header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    /// Channel count of the encoded image: 1 for gray, 3 for color.
    pub native_channels: u32,
}

/// Color space requested for decode output or declared for encode input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Gray,
    Rgb,
}

impl ColorSpace {
    /// Bytes per pixel in this color space.
    pub fn channels(self) -> u32 {
        match self {
            ColorSpace::Gray => 1,
            ColorSpace::Rgb => 3,
        }
    }
}

/// Parameters fixed at the start of an encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeParams {
    pub width: u32,
    pub height: u32,
    pub color: ColorSpace,
    pub quality: u8,
}

impl EncodeParams {
    /// Bytes per scanline (`width * channels`).
    pub fn stride(&self) -> usize {
        self.width as usize * self.color.channels() as usize
    }
}

/// Decode side of the codec collaborator.
pub trait ScanlineDecoder {
    /// Parse the stream header and report the image geometry.
    fn read_header(&mut self) -> CodecResult<ImageHeader>;

    /// Begin decompression, producing scanlines in `color`.
    fn start(&mut self, color: ColorSpace) -> CodecResult<()>;

    /// Decode the next scanline into `buf`, which holds exactly
    /// `width * channels` bytes.
    fn read_scanline(&mut self, buf: &mut [u8]) -> CodecResult<()>;

    /// Complete the decode and release codec-internal buffers.
    fn finish(&mut self) -> CodecResult<()>;
}

/// Encode side of the codec collaborator.
pub trait ScanlineEncoder {
    /// Begin compression with the given fixed parameters.
    fn start(&mut self, params: &EncodeParams) -> CodecResult<()>;

    /// Encode one scanline of exactly `width * channels` bytes.
    fn write_scanline(&mut self, line: &[u8]) -> CodecResult<()>;

    /// Complete the encode, flushing any buffered output.
    fn finish(&mut self) -> CodecResult<()>;
}
