//! Streaming scanline writer

use crate::codec::{ColorSpace, EncodeParams, ScanlineEncoder};
use crate::error::{StreamError, StreamResult};

/// Lifecycle of a [`StreamWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    Compressing,
    Finished,
    Destroyed,
}

/// Stateful wrapper around a [`ScanlineEncoder`] consuming exactly
/// `height` caller-supplied scanlines.
///
/// The encode finishes automatically when the declared last row is
/// written. Supplying further rows after that fails with
/// [`StreamError::NotOpen`].
pub struct StreamWriter<E: ScanlineEncoder> {
    encoder: E,
    params: EncodeParams,
    rows_written: u32,
    state: WriterState,
}

impl<E: ScanlineEncoder> StreamWriter<E> {
    /// Validate parameters and immediately start compression.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidParameter`] for zero dimensions or
    /// a quality above 100, before the encoder is touched.
    pub fn open(mut encoder: E, params: EncodeParams) -> StreamResult<Self> {
        if params.width == 0 || params.height == 0 {
            return Err(StreamError::InvalidParameter(format!(
                "image dimensions must be nonzero: {}x{}",
                params.width, params.height
            )));
        }
        if params.quality > 100 {
            return Err(StreamError::InvalidParameter(format!(
                "quality {} out of range 0..=100",
                params.quality
            )));
        }
        encoder.start(&params)?;
        Ok(Self {
            encoder,
            params,
            rows_written: 0,
            state: WriterState::Compressing,
        })
    }

    pub fn width(&self) -> u32 {
        self.params.width
    }

    pub fn height(&self) -> u32 {
        self.params.height
    }

    pub fn color(&self) -> ColorSpace {
        self.params.color
    }

    /// Bytes required per scanline.
    pub fn stride(&self) -> usize {
        self.params.stride()
    }

    /// Number of rows accepted so far.
    pub fn rows_written(&self) -> u32 {
        self.rows_written
    }

    /// Whether the declared height was reached and the encode finished.
    pub fn is_finished(&self) -> bool {
        self.state == WriterState::Finished
    }

    /// Encode one scanline.
    ///
    /// `line` must hold at least `width * channels` bytes; extra bytes
    /// are ignored. Writing the final row finishes the encode.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::TooShortData`] for an undersized line,
    /// leaving the row counter unadvanced, and [`StreamError::NotOpen`]
    /// once the writer is finished or closed.
    pub fn write_scanline(&mut self, line: &[u8]) -> StreamResult<()> {
        if self.state != WriterState::Compressing {
            return Err(StreamError::NotOpen);
        }
        let stride = self.stride();
        if line.len() < stride {
            return Err(StreamError::TooShortData {
                required: stride,
                actual: line.len(),
            });
        }
        if let Err(e) = self.encoder.write_scanline(&line[..stride]) {
            // A partial frame cannot be completed, so finish is skipped.
            self.state = WriterState::Destroyed;
            return Err(e.into());
        }
        self.rows_written += 1;
        if self.rows_written == self.params.height {
            self.state = WriterState::Finished;
            self.encoder.finish()?;
        }
        Ok(())
    }

    /// Encode a sequence of scanlines, one per remaining row.
    ///
    /// Stops at the first failure or when the encode finishes; surplus
    /// items in `lines` are not consumed.
    pub fn write_lines<I>(&mut self, lines: I) -> StreamResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut lines = lines.into_iter();
        // State is checked before each pull so the encode finishing on
        // the last row never consumes a surplus item from the caller.
        while self.state == WriterState::Compressing {
            let Some(line) = lines.next() else { break };
            self.write_scanline(line.as_ref())?;
        }
        Ok(())
    }

    /// Tear down the writer.
    ///
    /// Idempotent. If fewer than `height` rows were written the encode
    /// cannot be completed, so the finish call is skipped and the
    /// encoder context is simply released.
    pub fn close(&mut self) -> StreamResult<()> {
        self.state = WriterState::Destroyed;
        Ok(())
    }
}
