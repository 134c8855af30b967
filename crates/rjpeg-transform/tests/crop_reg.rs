//! Regression test for cropping and border trimming

use rjpeg_test::{framed_gray, uniform_gray, RegParams};
use rjpeg_transform::{crop, crop_to_content};

#[test]
fn test_crop_reg() {
    let mut rp = RegParams::new("crop");

    // Explicit rectangle, inclusive corners.
    let src = framed_gray(12, 10, 2, 0, 200);
    let out = crop(&src, 2, 2, 9, 7).unwrap();
    rp.compare_values(8.0, out.width() as f64, 0.0);
    rp.compare_values(6.0, out.height() as f64, 0.0);
    rp.check(out.pixels().iter().all(|&v| v == 200), "interior crop is uniform");

    // Overhanging far corner is clamped instead of rejected.
    let out = crop(&src, 10, 8, 50, 50).unwrap();
    rp.compare_values(2.0, out.width() as f64, 0.0);
    rp.compare_values(2.0, out.height() as f64, 0.0);

    // Degenerate rectangles and out-of-image origins fail.
    rp.check(crop(&src, 5, 3, 5, 8).is_err(), "zero-width rect rejected");
    rp.check(crop(&src, 12, 0, 15, 5).is_err(), "origin past right edge rejected");

    assert!(rp.cleanup());
}

#[test]
fn test_crop_to_content_reg() {
    let mut rp = RegParams::new("crop_to_content");

    // A 10px uniform border around non-uniform content is trimmed exactly.
    let src = framed_gray(40, 32, 10, 0, 180);
    let out = crop_to_content(&src).unwrap().unwrap();
    rp.compare_values(20.0, out.width() as f64, 0.0);
    rp.compare_values(12.0, out.height() as f64, 0.0);
    rp.check(out.pixels().iter().all(|&v| v == 180), "trimmed to interior only");

    // Entirely uniform image yields the no-crop sentinel.
    let flat = uniform_gray(16, 16, 42);
    rp.check(
        crop_to_content(&flat).unwrap().is_none(),
        "uniform image has nothing to crop to",
    );

    // Content collapsing to a single row is also a sentinel.
    let mut thin = uniform_gray(8, 8, 0);
    for x in 2..6 {
        thin.row_mut(4)[x] = 99;
    }
    rp.check(
        crop_to_content(&thin).unwrap().is_none(),
        "single-row content is degenerate",
    );

    assert!(rp.cleanup());
}
