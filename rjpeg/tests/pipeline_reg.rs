//! Regression test for a full decode, transform, encode pipeline
//! through the umbrella crate's re-exports

use rjpeg::codec::{read_with, write_with};
use rjpeg::transform::{auto_contrast, grayscale, resize, ResampleKernel};
use rjpeg_test::{count_calls, EncoderCall, MockDecoder, MockEncoder, RegParams};

#[test]
fn test_pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    // Decode a mock 6x4 RGB source; row y arrives filled with y.
    let img = read_with(MockDecoder::new(6, 4, 3)).unwrap();
    rp.compare_values(6.0, img.width() as f64, 0.0);
    rp.compare_values(4.0, img.height() as f64, 0.0);
    rp.check(!img.is_gray(), "3-channel source decodes as RGB");

    // Transform chain: grayscale, contrast stretch, half-size resize.
    let gray = grayscale(&img).unwrap();
    rp.check(gray.is_gray(), "grayscale output is single channel");
    let stretched = auto_contrast(&gray).unwrap();
    let half = resize(&stretched, 3, 2, ResampleKernel::Bilinear).unwrap();
    rp.compare_values(3.0, half.width() as f64, 0.0);
    rp.compare_values(2.0, half.height() as f64, 0.0);
    rp.compare_values(6.0, half.pixels().len() as f64, 0.0);

    // Encode drives one scanline per row, then finishes once.
    let encoder = MockEncoder::new();
    let log = encoder.log();
    write_with(&half, encoder).unwrap();
    rp.compare_values(
        2.0,
        log.borrow()
            .iter()
            .filter(|c| matches!(c, EncoderCall::WriteScanline(line) if line.len() == 3))
            .count() as f64,
        0.0,
    );
    rp.compare_values(1.0, count_calls(&log, &EncoderCall::Finish) as f64, 0.0);

    assert!(rp.cleanup());
}
