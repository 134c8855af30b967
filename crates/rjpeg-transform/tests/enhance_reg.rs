//! Regression test for contrast enhancement and grayscale conversion

use rjpeg_core::ImageBuffer;
use rjpeg_test::{gradient_rgb, uniform_gray, uniform_rgb, RegParams};
use rjpeg_transform::{auto_contrast, grayscale, level};

#[test]
fn test_level_reg() {
    let mut rp = RegParams::new("level");

    // Full-range thresholds are the identity in both modes.
    let src = gradient_rgb(8, 4);
    rp.compare_images(&src, &level(&src, 0, 100, false).unwrap(), 0);
    rp.compare_images(&src, &level(&src, 0, 100, true).unwrap(), 0);

    // A tight band with stretch binarizes.
    let out = level(&src, 50, 51, true).unwrap();
    rp.check(
        out.pixels().iter().all(|&v| v == 0 || v == 255),
        "tight-band level output is binary",
    );

    // Clip-only mode leaves mid-band values untouched.
    let mid =
        ImageBuffer::from_raw(4, 1, true, 100, vec![100, 120, 140, 160]).unwrap();
    let out = level(&mid, 25, 75, false).unwrap();
    rp.compare_images(&mid, &out, 0);

    // Invalid percentage ranges are rejected.
    rp.check(level(&src, 80, 20, false).is_err(), "low above high rejected");
    rp.check(level(&src, 30, 30, false).is_err(), "equal thresholds rejected");

    assert!(rp.cleanup());
}

#[test]
fn test_auto_contrast_reg() {
    let mut rp = RegParams::new("auto_contrast");

    // A uniform image has no spread on either side of the median.
    let flat = uniform_gray(6, 6, 77);
    rp.compare_images(&flat, &auto_contrast(&flat).unwrap(), 0);
    let flat = uniform_rgb(6, 6, [5, 200, 90]);
    rp.compare_images(&flat, &auto_contrast(&flat).unwrap(), 0);

    // Three luma populations stretch to the full output range.
    let mut values = vec![50u8; 16];
    values.extend(vec![100u8; 32]);
    values.extend(vec![200u8; 16]);
    let src = ImageBuffer::from_raw(8, 8, true, 100, values).unwrap();
    let out = auto_contrast(&src).unwrap();
    rp.compare_values(0.0, out.pixel(0, 0)[0] as f64, 0.0);
    rp.compare_values(128.0, out.pixel(0, 2)[0] as f64, 0.0);
    rp.compare_values(255.0, out.pixel(0, 6)[0] as f64, 0.0);

    // Output geometry matches the input.
    rp.compare_values(src.width() as f64, out.width() as f64, 0.0);
    rp.compare_values(src.height() as f64, out.height() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn test_grayscale_reg() {
    let mut rp = RegParams::new("grayscale");

    // Converting an RGB image yields the fixed-point luma per pixel.
    let src = ImageBuffer::from_raw(
        3,
        1,
        false,
        100,
        vec![255, 0, 0, 0, 255, 0, 0, 0, 255],
    )
    .unwrap();
    let out = grayscale(&src).unwrap();
    rp.check(out.is_gray(), "output is single channel");
    rp.compare_strings(&[76, 149, 28], out.pixels());

    // Idempotent: a second conversion is an identity copy.
    let twice = grayscale(&out).unwrap();
    rp.compare_images(&out, &twice, 0);

    assert!(rp.cleanup());
}
