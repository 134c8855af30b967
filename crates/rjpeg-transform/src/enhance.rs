//! Tone and contrast adjustment
//!
//! All operations here are pure: they take an [`ImageBuffer`] reference
//! and produce a new one. The remapping functions build a 256-entry
//! lookup table once and apply it per channel value.

use rjpeg_core::{luma::luma, ImageBuffer};

use crate::error::{TransformError, TransformResult};

/// Lookup table mapping each 8-bit channel value to its remapped value.
type ToneLut = [u8; 256];

/// Per-pixel luma of the image at `(x, y)`.
///
/// Gray images return the stored value directly.
fn pixel_luma(img: &ImageBuffer, x: u32, y: u32) -> u8 {
    let p = img.pixel(x, y);
    if img.is_gray() {
        p[0]
    } else {
        luma(p[0], p[1], p[2])
    }
}

fn apply_lut(src: &ImageBuffer, lut: &ToneLut) -> ImageBuffer {
    let mut dst = src.clone();
    for y in 0..src.height() {
        for v in dst.row_mut(y) {
            *v = lut[*v as usize];
        }
    }
    dst
}

/// Stretch the image contrast around the luma median.
///
/// Builds a 256-bin histogram of per-pixel luma, finds the smallest and
/// largest luma present and the median bin, then linearly remaps values
/// below the median onto `0..=127` and values at or above it onto
/// `128..=255`. The breakpoint is shared across channels, so color casts
/// survive the stretch.
///
/// If the image has no spread on either side of the median (for example
/// a uniform image) the input is returned unchanged.
pub fn auto_contrast(src: &ImageBuffer) -> TransformResult<ImageBuffer> {
    let mut histo = [0u64; 256];
    for y in 0..src.height() {
        for x in 0..src.width() {
            histo[pixel_luma(src, x, y) as usize] += 1;
        }
    }

    let total = src.width() as u64 * src.height() as u64;
    let half = total.div_ceil(2);

    let min = histo.iter().position(|&c| c > 0).unwrap_or(0) as i32;
    let max = histo.iter().rposition(|&c| c > 0).unwrap_or(255) as i32;

    let mut median = 128i32;
    let mut cum = 0u64;
    for (i, &count) in histo.iter().enumerate() {
        cum += count;
        if cum >= half {
            median = i as i32;
            break;
        }
    }

    let low = median - min;
    let high = max - median;
    if low == 0 || high == 0 {
        return Ok(src.clone());
    }

    let mut lut: ToneLut = [0; 256];
    for (v, entry) in lut.iter_mut().enumerate() {
        let v = v as i32;
        let mapped = if v < median {
            (v - min) * 127 / low
        } else {
            (v - median) * 127 / high + 128
        };
        *entry = mapped.clamp(0, 255) as u8;
    }

    Ok(apply_lut(src, &lut))
}

/// Clip channel values against percentage thresholds, optionally
/// rescaling the band between them.
///
/// `low_pct` and `high_pct` are percentages converted to 8-bit
/// thresholds `low = low_pct * 256 / 100` and `high = high_pct * 256 / 100`.
/// Values below `low` map to 0 and values at or above `high` map to 255.
/// Values in between pass through unchanged, or when `adjust` is set,
/// rescale as `(v - low) * (high - low) / 256`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] unless
/// `low_pct < high_pct` and both are at most 100.
pub fn level(
    src: &ImageBuffer,
    low_pct: u8,
    high_pct: u8,
    adjust: bool,
) -> TransformResult<ImageBuffer> {
    if low_pct > 100 || high_pct > 100 || low_pct >= high_pct {
        return Err(TransformError::InvalidParameters(format!(
            "level thresholds out of range: low={}%, high={}%",
            low_pct, high_pct
        )));
    }

    let low = low_pct as i32 * 256 / 100;
    let high = high_pct as i32 * 256 / 100;
    let span = high - low;

    let mut lut: ToneLut = [0; 256];
    for (v, entry) in lut.iter_mut().enumerate() {
        let v = v as i32;
        let mapped = if v < low {
            0
        } else if v >= high {
            255
        } else if adjust {
            (v - low) * span / 256
        } else {
            v
        };
        *entry = mapped.clamp(0, 255) as u8;
    }

    Ok(apply_lut(src, &lut))
}

/// Convert the image to single-channel grayscale.
///
/// An already-gray source is copied unchanged. RGB sources are reduced
/// per pixel with the fixed-point luma weights.
pub fn grayscale(src: &ImageBuffer) -> TransformResult<ImageBuffer> {
    if src.is_gray() {
        return Ok(src.clone());
    }

    let mut dst = ImageBuffer::new(src.width(), src.height(), true)?;
    dst.set_quality(src.quality())?;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let p = src.pixel(x, y);
            dst.row_mut(y)[x as usize] = luma(p[0], p[1], p[2]);
        }
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_of(values: &[u8], w: u32, h: u32) -> ImageBuffer {
        ImageBuffer::from_raw(w, h, true, 100, values.to_vec()).unwrap()
    }

    // ========== level ==========

    #[test]
    fn test_level_rejects_bad_thresholds() {
        let img = ImageBuffer::new(2, 2, true).unwrap();
        assert!(level(&img, 50, 50, false).is_err());
        assert!(level(&img, 60, 40, false).is_err());
        assert!(level(&img, 0, 101, false).is_err());
    }

    #[test]
    fn test_level_full_range_is_identity() {
        let img = gray_of(&[0, 1, 127, 128, 254, 255], 6, 1);
        let out = level(&img, 0, 100, false).unwrap();
        assert_eq!(out.pixels(), img.pixels());
        let out = level(&img, 0, 100, true).unwrap();
        assert_eq!(out.pixels(), img.pixels());
    }

    #[test]
    fn test_level_clip_only_passes_band_through() {
        // low = 25*256/100 = 64, high = 75*256/100 = 192
        let img = gray_of(&[10, 64, 100, 191, 192, 250], 6, 1);
        let out = level(&img, 25, 75, false).unwrap();
        assert_eq!(out.pixels(), &[0, 64, 100, 191, 255, 255]);
    }

    #[test]
    fn test_level_tight_band_binarizes() {
        let img = gray_of(&[0, 64, 127, 128, 129, 200, 255], 7, 1);
        let out = level(&img, 50, 51, true).unwrap();
        assert!(out.pixels().iter().all(|&v| v == 0 || v == 255));
    }

    // ========== auto_contrast ==========

    #[test]
    fn test_auto_contrast_uniform_is_noop() {
        let img = gray_of(&[130; 9], 3, 3);
        let out = auto_contrast(&img).unwrap();
        assert_eq!(out.pixels(), img.pixels());
    }

    #[test]
    fn test_auto_contrast_stretches_to_full_range() {
        // min = 50, median = 100, max = 200
        let mut values = Vec::new();
        values.extend(std::iter::repeat(50u8).take(16));
        values.extend(std::iter::repeat(100u8).take(32));
        values.extend(std::iter::repeat(200u8).take(16));
        let img = gray_of(&values, 8, 8);
        let out = auto_contrast(&img).unwrap();
        // low = 50, high = 100
        assert_eq!(out.pixel(0, 0)[0], 0); // (50-50)*127/50
        assert_eq!(out.pixel(0, 2)[0], 128); // (100-100)*127/100 + 128
        assert_eq!(out.pixel(0, 6)[0], 255); // (200-100)*127/100 + 128
    }

    // ========== grayscale ==========

    #[test]
    fn test_grayscale_of_gray_is_copy() {
        let img = gray_of(&[3, 1, 4, 1], 2, 2);
        let out = grayscale(&img).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_grayscale_reduces_channels() {
        let img = ImageBuffer::from_raw(
            2,
            1,
            false,
            100,
            vec![255, 0, 0, 255, 255, 255],
        )
        .unwrap();
        let out = grayscale(&img).unwrap();
        assert!(out.is_gray());
        assert_eq!(out.pixels(), &[76, 255]);
    }

    #[test]
    fn test_grayscale_is_idempotent() {
        let img = ImageBuffer::from_raw(1, 1, false, 100, vec![10, 200, 30]).unwrap();
        let once = grayscale(&img).unwrap();
        let twice = grayscale(&once).unwrap();
        assert_eq!(once, twice);
    }
}
