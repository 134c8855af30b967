//! Streaming scanline codec layer
//!
//! [`StreamReader`] and [`StreamWriter`] wrap an opaque codec
//! collaborator (the [`ScanlineDecoder`] / [`ScanlineEncoder`] traits)
//! and enforce its call ordering: header read, start, scanlines in row
//! order, finish, teardown. The JPEG implementations live in [`jpeg`].
//!
//! [`read`] and [`write`] are full-buffer conveniences composed from the
//! streaming types.

pub mod codec;
pub mod error;
pub mod jpeg;
pub mod reader;
pub mod writer;

pub use codec::{ColorSpace, EncodeParams, ImageHeader, ScanlineDecoder, ScanlineEncoder};
pub use error::{codes, CodecError, CodecErrorKind, CodecResult, StreamError, StreamResult};
pub use jpeg::{JpegDecoder, JpegEncoder};
pub use reader::{Scanlines, StreamReader};
pub use writer::StreamWriter;

use std::io::{Read, Write};

use rjpeg_core::ImageBuffer;

/// Decode a full image through any scanline decoder.
///
/// An "insufficient data" codec failure is tolerated as a soft end of
/// stream: the rows decoded so far are kept and the remainder stays
/// zero-filled. Decoded images report quality 100 since the original
/// encoder setting is not recoverable from the stream.
///
/// # Errors
///
/// Propagates any other codec failure.
pub fn read_with<D: ScanlineDecoder>(decoder: D) -> StreamResult<ImageBuffer> {
    let mut reader = StreamReader::open(decoder)?;
    let stride = reader.stride();
    let mut pixels = vec![0u8; stride * reader.height() as usize];
    let mut row = 0usize;
    loop {
        match reader.next_scanline() {
            Ok(Some(line)) => {
                pixels[row * stride..(row + 1) * stride].copy_from_slice(&line);
                row += 1;
            }
            Ok(None) => break,
            Err(StreamError::Codec(e)) if e.is_insufficient_data() => break,
            Err(e) => return Err(e),
        }
    }
    let (width, height, gray) = (reader.width(), reader.height(), reader.is_gray());
    reader.close()?;
    Ok(ImageBuffer::from_raw(width, height, gray, 100, pixels)?)
}

/// Decode a full JPEG image from a byte source.
pub fn read<R: Read>(source: R) -> StreamResult<ImageBuffer> {
    read_with(JpegDecoder::new(source))
}

/// Encode a full image through any scanline encoder.
///
/// Encode parameters (dimensions, color space, quality) come from the
/// image itself.
pub fn write_with<E: ScanlineEncoder>(image: &ImageBuffer, encoder: E) -> StreamResult<()> {
    let params = EncodeParams {
        width: image.width(),
        height: image.height(),
        color: if image.is_gray() {
            ColorSpace::Gray
        } else {
            ColorSpace::Rgb
        },
        quality: image.quality(),
    };
    let mut writer = StreamWriter::open(encoder, params)?;
    writer.write_lines((0..image.height()).map(|y| image.row(y)))?;
    writer.close()?;
    Ok(())
}

/// Encode a full image as JPEG into a byte sink.
pub fn write<W: Write>(image: &ImageBuffer, dest: W) -> StreamResult<()> {
    write_with(image, JpegEncoder::new(dest))
}
