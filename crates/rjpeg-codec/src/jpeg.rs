//! JPEG adapters for the codec collaborator traits
//!
//! [`JpegDecoder`] wraps the `jpeg-decoder` crate; [`JpegEncoder`] wraps
//! `jpeg-encoder`. Both crates work on whole frames, so the adapters map
//! the scanline protocol onto buffered frames: the decoder decodes the
//! full image at `start` and serves it row by row, and the encoder
//! collects rows and compresses them at `finish`.

use std::io::{Read, Write};

use jpeg_decoder::PixelFormat;

use crate::codec::{ColorSpace, EncodeParams, ImageHeader, ScanlineDecoder, ScanlineEncoder};
use crate::error::{codes, CodecError, CodecResult};

fn map_decode_error(e: jpeg_decoder::Error) -> CodecError {
    use jpeg_decoder::Error;
    match e {
        Error::Format(msg) => CodecError::new(codes::BAD_HEADER, msg),
        Error::Unsupported(feature) => CodecError::new(
            codes::UNSUPPORTED_FEATURE,
            format!("unsupported feature: {:?}", feature),
        ),
        Error::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            CodecError::new(codes::TOO_LITTLE_DATA, "too short data passed")
        }
        Error::Io(e) => CodecError::new(codes::IO, e.to_string()),
        Error::Internal(e) => CodecError::new(codes::INTERNAL, e.to_string()),
    }
}

/// Scanline decoder backed by `jpeg-decoder`.
pub struct JpegDecoder<R: Read> {
    inner: jpeg_decoder::Decoder<R>,
    header: Option<ImageHeader>,
    frame: Option<Vec<u8>>,
    stride: usize,
    next_row: usize,
}

impl<R: Read> JpegDecoder<R> {
    pub fn new(source: R) -> Self {
        Self {
            inner: jpeg_decoder::Decoder::new(source),
            header: None,
            frame: None,
            stride: 0,
            next_row: 0,
        }
    }
}

impl<R: Read> ScanlineDecoder for JpegDecoder<R> {
    fn read_header(&mut self) -> CodecResult<ImageHeader> {
        self.inner.read_info().map_err(map_decode_error)?;
        let info = self
            .inner
            .info()
            .ok_or_else(|| CodecError::new(codes::INTERNAL, "header not available after read"))?;
        let native_channels = match info.pixel_format {
            PixelFormat::L8 => 1,
            PixelFormat::RGB24 => 3,
            other => {
                return Err(CodecError::new(
                    codes::UNSUPPORTED_FEATURE,
                    format!("unsupported pixel format: {:?}", other),
                ));
            }
        };
        let header = ImageHeader {
            width: info.width as u32,
            height: info.height as u32,
            native_channels,
        };
        self.header = Some(header);
        Ok(header)
    }

    fn start(&mut self, color: ColorSpace) -> CodecResult<()> {
        let header = self
            .header
            .ok_or_else(|| CodecError::new(codes::INTERNAL, "start called before header read"))?;
        if color.channels() != header.native_channels {
            return Err(CodecError::new(
                codes::UNSUPPORTED_FEATURE,
                "color space conversion during decode is not supported",
            ));
        }
        let frame = self.inner.decode().map_err(map_decode_error)?;
        self.stride = header.width as usize * color.channels() as usize;
        let expected = self.stride * header.height as usize;
        if frame.len() != expected {
            return Err(CodecError::new(
                codes::INTERNAL,
                format!("frame size mismatch: expected {expected}, got {}", frame.len()),
            ));
        }
        self.frame = Some(frame);
        self.next_row = 0;
        Ok(())
    }

    fn read_scanline(&mut self, buf: &mut [u8]) -> CodecResult<()> {
        let frame = self
            .frame
            .as_ref()
            .ok_or_else(|| CodecError::new(codes::INTERNAL, "decode not started"))?;
        let start = self.next_row * self.stride;
        let Some(row) = frame.get(start..start + self.stride) else {
            return Err(CodecError::new(codes::INTERNAL, "scanline past end of frame"));
        };
        buf.copy_from_slice(row);
        self.next_row += 1;
        Ok(())
    }

    fn finish(&mut self) -> CodecResult<()> {
        self.frame = None;
        Ok(())
    }
}

/// Scanline encoder backed by `jpeg-encoder`.
///
/// Output uses progressive mode with optimized Huffman tables.
pub struct JpegEncoder<W: Write> {
    dest: W,
    params: Option<EncodeParams>,
    rows: Vec<u8>,
}

impl<W: Write> JpegEncoder<W> {
    pub fn new(dest: W) -> Self {
        Self {
            dest,
            params: None,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> ScanlineEncoder for JpegEncoder<W> {
    fn start(&mut self, params: &EncodeParams) -> CodecResult<()> {
        if params.width > u16::MAX as u32 || params.height > u16::MAX as u32 {
            return Err(CodecError::new(
                codes::UNSUPPORTED_FEATURE,
                format!(
                    "dimensions {}x{} exceed the format limit of 65535",
                    params.width, params.height
                ),
            ));
        }
        self.rows = Vec::with_capacity(params.stride() * params.height as usize);
        self.params = Some(*params);
        Ok(())
    }

    fn write_scanline(&mut self, line: &[u8]) -> CodecResult<()> {
        if self.params.is_none() {
            return Err(CodecError::new(codes::INTERNAL, "encode not started"));
        }
        self.rows.extend_from_slice(line);
        Ok(())
    }

    fn finish(&mut self) -> CodecResult<()> {
        let params = self
            .params
            .take()
            .ok_or_else(|| CodecError::new(codes::INTERNAL, "encode not started"))?;
        let color_type = match params.color {
            ColorSpace::Gray => jpeg_encoder::ColorType::Luma,
            ColorSpace::Rgb => jpeg_encoder::ColorType::Rgb,
        };

        let mut out = Vec::new();
        let mut encoder = jpeg_encoder::Encoder::new(&mut out, params.quality);
        encoder.set_progressive(true);
        encoder.set_optimized_huffman_tables(true);
        encoder
            .encode(
                &self.rows,
                params.width as u16,
                params.height as u16,
                color_type,
            )
            .map_err(|e| CodecError::new(codes::INTERNAL, e.to_string()))?;
        self.rows = Vec::new();

        self.dest
            .write_all(&out)
            .map_err(|e| CodecError::new(codes::IO, e.to_string()))?;
        Ok(())
    }
}
