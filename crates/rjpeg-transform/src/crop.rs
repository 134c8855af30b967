//! Cropping and uniform-border trimming

use rjpeg_core::ImageBuffer;

use crate::error::{TransformError, TransformResult};

/// Extract the rectangle with corners `(x1, y1)` and `(x2, y2)`, both
/// inclusive.
///
/// The far corner is clamped to the image bounds, so a rectangle that
/// overhangs the right or bottom edge is trimmed rather than rejected.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] unless `x1 < x2`,
/// `y1 < y2`, and `(x1, y1)` lies inside the image.
pub fn crop(
    src: &ImageBuffer,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
) -> TransformResult<ImageBuffer> {
    if x1 >= x2 || y1 >= y2 {
        return Err(TransformError::InvalidParameters(format!(
            "degenerate crop rectangle: ({}, {})-({}, {})",
            x1, y1, x2, y2
        )));
    }
    if x1 >= src.width() || y1 >= src.height() {
        return Err(TransformError::InvalidParameters(format!(
            "crop origin ({}, {}) outside image {}x{}",
            x1,
            y1,
            src.width(),
            src.height()
        )));
    }

    let x2 = x2.min(src.width() - 1);
    let y2 = y2.min(src.height() - 1);

    let ch = src.channels() as usize;
    let mut dst = ImageBuffer::new(x2 - x1 + 1, y2 - y1 + 1, src.is_gray())?;
    dst.set_quality(src.quality())?;

    let left = x1 as usize * ch;
    let right = (x2 as usize + 1) * ch;
    for dy in 0..dst.height() {
        let sy = y1 + dy;
        let span = &src.row(sy)[left..right];
        dst.row_mut(dy).copy_from_slice(span);
    }
    Ok(dst)
}

/// Trim a uniform border, using the top-left pixel as the border color.
///
/// Scans for the bounding rectangle of all pixels that differ from the
/// top-left pixel in any channel, then crops to it. Returns `Ok(None)`
/// when the image is entirely uniform or the detected content collapses
/// to a single row or column, since a zero-area crop has no meaningful
/// result.
pub fn crop_to_content(src: &ImageBuffer) -> TransformResult<Option<ImageBuffer>> {
    let base = src.pixel(0, 0);
    let differs = |x: u32, y: u32| src.pixel(x, y) != base;

    let mut y1 = None;
    'top: for y in 0..src.height() {
        for x in 0..src.width() {
            if differs(x, y) {
                y1 = Some(y);
                break 'top;
            }
        }
    }
    let Some(y1) = y1 else {
        return Ok(None);
    };

    let mut y2 = y1;
    'bottom: for y in (y1..src.height()).rev() {
        for x in 0..src.width() {
            if differs(x, y) {
                y2 = y;
                break 'bottom;
            }
        }
    }

    let mut x1 = src.width() - 1;
    'left: for x in 0..src.width() {
        for y in y1..=y2 {
            if differs(x, y) {
                x1 = x;
                break 'left;
            }
        }
    }

    let mut x2 = x1;
    'right: for x in (x1..src.width()).rev() {
        for y in y1..=y2 {
            if differs(x, y) {
                x2 = x;
                break 'right;
            }
        }
    }

    if x1 == x2 || y1 == y2 {
        return Ok(None);
    }

    crop(src, x1, y1, x2, y2).map(Some)
}
