//! Mock codec implementations
//!
//! [`MockDecoder`] and [`MockEncoder`] record every trait call into a
//! shared log so tests can assert the exact call ordering the stream
//! wrappers produce.

use std::cell::RefCell;
use std::rc::Rc;

use rjpeg_codec::{
    codes, CodecError, CodecResult, ColorSpace, EncodeParams, ImageHeader, ScanlineDecoder,
    ScanlineEncoder,
};

/// One recorded decoder trait call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderCall {
    ReadHeader,
    Start(ColorSpace),
    ReadScanline(u32),
    Finish,
}

/// Shared call log, cloneable so the test keeps a handle after the
/// mock moves into the stream wrapper.
pub type CallLog<T> = Rc<RefCell<Vec<T>>>;

/// Scanline decoder serving synthetic rows and logging every call.
///
/// Row `y` is filled with the byte value `y` so consumers can verify
/// row identity and ordering.
pub struct MockDecoder {
    header: ImageHeader,
    next_row: u32,
    /// Rows available before the source "runs out"; `None` means all.
    available_rows: Option<u32>,
    log: CallLog<DecoderCall>,
}

impl MockDecoder {
    pub fn new(width: u32, height: u32, native_channels: u32) -> Self {
        Self {
            header: ImageHeader {
                width,
                height,
                native_channels,
            },
            next_row: 0,
            available_rows: None,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Make the source run out of data after `rows` scanlines; further
    /// reads fail with the insufficient-data code.
    pub fn truncated_after(mut self, rows: u32) -> Self {
        self.available_rows = Some(rows);
        self
    }

    /// Handle to the call log.
    pub fn log(&self) -> CallLog<DecoderCall> {
        Rc::clone(&self.log)
    }
}

impl ScanlineDecoder for MockDecoder {
    fn read_header(&mut self) -> CodecResult<ImageHeader> {
        self.log.borrow_mut().push(DecoderCall::ReadHeader);
        Ok(self.header)
    }

    fn start(&mut self, color: ColorSpace) -> CodecResult<()> {
        self.log.borrow_mut().push(DecoderCall::Start(color));
        Ok(())
    }

    fn read_scanline(&mut self, buf: &mut [u8]) -> CodecResult<()> {
        self.log
            .borrow_mut()
            .push(DecoderCall::ReadScanline(self.next_row));
        if let Some(limit) = self.available_rows {
            if self.next_row >= limit {
                return Err(CodecError::new(codes::TOO_LITTLE_DATA, "too short data passed"));
            }
        }
        buf.fill(self.next_row as u8);
        self.next_row += 1;
        Ok(())
    }

    fn finish(&mut self) -> CodecResult<()> {
        self.log.borrow_mut().push(DecoderCall::Finish);
        Ok(())
    }
}

/// One recorded encoder trait call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderCall {
    Start(EncodeParams),
    WriteScanline(Vec<u8>),
    Finish,
}

/// Scanline encoder capturing everything it is given.
#[derive(Default)]
pub struct MockEncoder {
    log: CallLog<EncoderCall>,
}

impl MockEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the call log.
    pub fn log(&self) -> CallLog<EncoderCall> {
        Rc::clone(&self.log)
    }
}

impl ScanlineEncoder for MockEncoder {
    fn start(&mut self, params: &EncodeParams) -> CodecResult<()> {
        self.log.borrow_mut().push(EncoderCall::Start(*params));
        Ok(())
    }

    fn write_scanline(&mut self, line: &[u8]) -> CodecResult<()> {
        self.log
            .borrow_mut()
            .push(EncoderCall::WriteScanline(line.to_vec()));
        Ok(())
    }

    fn finish(&mut self) -> CodecResult<()> {
        self.log.borrow_mut().push(EncoderCall::Finish);
        Ok(())
    }
}

/// Count occurrences of one call shape in a log.
pub fn count_calls<T: PartialEq>(log: &CallLog<T>, call: &T) -> usize {
    log.borrow().iter().filter(|c| *c == call).count()
}
