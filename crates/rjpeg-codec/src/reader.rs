//! Streaming scanline reader

use crate::codec::{ColorSpace, ImageHeader, ScanlineDecoder};
use crate::error::{StreamError, StreamResult};

/// Lifecycle of a [`StreamReader`].
///
/// States only ever advance: `Decompressing` to `Finished` to
/// `Destroyed`. The decoder's `finish` runs exactly once, on whichever
/// transition leaves `Decompressing` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    Decompressing,
    Finished,
    Destroyed,
}

/// Stateful wrapper around a [`ScanlineDecoder`] producing a finite,
/// non-restartable sequence of scanlines.
///
/// # Examples
///
/// ```no_run
/// use rjpeg_codec::{JpegDecoder, StreamReader};
///
/// let bytes: Vec<u8> = std::fs::read("photo.jpg")?;
/// let mut reader = StreamReader::open(JpegDecoder::new(bytes.as_slice()))?;
/// for line in reader.scanlines() {
///     let line = line?;
///     assert_eq!(line.len(), 3 * 4); // 4 px RGB
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct StreamReader<D: ScanlineDecoder> {
    decoder: D,
    header: ImageHeader,
    color: ColorSpace,
    next_row: u32,
    state: ReaderState,
}

impl<D: ScanlineDecoder> StreamReader<D> {
    /// Parse the header and immediately start decompression.
    ///
    /// Output color space is gray when the encoded image is
    /// single-channel, RGB otherwise.
    ///
    /// # Errors
    ///
    /// Propagates codec failures from header parsing or decode startup.
    pub fn open(mut decoder: D) -> StreamResult<Self> {
        let header = decoder.read_header()?;
        let color = if header.native_channels == 1 {
            ColorSpace::Gray
        } else {
            ColorSpace::Rgb
        };
        decoder.start(color)?;
        Ok(Self {
            decoder,
            header,
            color,
            next_row: 0,
            state: ReaderState::Decompressing,
        })
    }

    /// Image width in pixels. Valid for the reader's whole lifetime.
    pub fn width(&self) -> u32 {
        self.header.width
    }

    /// Image height in pixels. Valid for the reader's whole lifetime.
    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Color space of produced scanlines.
    pub fn color(&self) -> ColorSpace {
        self.color
    }

    /// Whether scanlines are single-channel gray.
    pub fn is_gray(&self) -> bool {
        self.color == ColorSpace::Gray
    }

    /// Bytes per scanline (`width * channels`).
    pub fn stride(&self) -> usize {
        self.header.width as usize * self.color.channels() as usize
    }

    /// Number of scanlines consumed so far.
    pub fn rows_read(&self) -> u32 {
        self.next_row
    }

    /// Decode the next scanline.
    ///
    /// Returns `Ok(None)` once all rows have been produced; the first
    /// exhausted call also finishes the decode. The cursor only moves
    /// forward, so a drained reader keeps returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::NotOpen`] after [`close`](Self::close).
    /// Codec failures abort the decode before propagating.
    pub fn next_scanline(&mut self) -> StreamResult<Option<Vec<u8>>> {
        match self.state {
            ReaderState::Destroyed => Err(StreamError::NotOpen),
            ReaderState::Finished => Ok(None),
            ReaderState::Decompressing => {
                if self.next_row >= self.header.height {
                    self.state = ReaderState::Finished;
                    self.decoder.finish()?;
                    return Ok(None);
                }
                let mut buf = vec![0u8; self.stride()];
                if let Err(e) = self.decoder.read_scanline(&mut buf) {
                    // Abort the decode so codec buffers are released
                    // before the failure reaches the caller.
                    self.state = ReaderState::Finished;
                    let _ = self.decoder.finish();
                    return Err(e.into());
                }
                self.next_row += 1;
                Ok(Some(buf))
            }
        }
    }

    /// Iterate over the remaining scanlines.
    ///
    /// The iterator is fused: after yielding an error or reaching the
    /// end it produces nothing further. It borrows the reader, so
    /// [`close`](Self::close) stays available afterwards.
    pub fn scanlines(&mut self) -> Scanlines<'_, D> {
        Scanlines {
            reader: self,
            done: false,
        }
    }

    /// Tear down the reader.
    ///
    /// Idempotent. Closing with scanlines still unread finishes the
    /// decode first so the codec context is released cleanly.
    ///
    /// # Errors
    ///
    /// Propagates a codec failure from the implied finish; the reader is
    /// destroyed regardless.
    pub fn close(&mut self) -> StreamResult<()> {
        match self.state {
            ReaderState::Destroyed => Ok(()),
            ReaderState::Finished => {
                self.state = ReaderState::Destroyed;
                Ok(())
            }
            ReaderState::Decompressing => {
                self.state = ReaderState::Destroyed;
                self.decoder.finish()?;
                Ok(())
            }
        }
    }
}

impl<D: ScanlineDecoder> Drop for StreamReader<D> {
    fn drop(&mut self) {
        if self.state == ReaderState::Decompressing {
            let _ = self.decoder.finish();
        }
    }
}

/// Borrowing iterator over a reader's remaining scanlines.
pub struct Scanlines<'a, D: ScanlineDecoder> {
    reader: &'a mut StreamReader<D>,
    done: bool,
}

impl<D: ScanlineDecoder> Iterator for Scanlines<'_, D> {
    type Item = StreamResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_scanline() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<D: ScanlineDecoder> std::iter::FusedIterator for Scanlines<'_, D> {}
