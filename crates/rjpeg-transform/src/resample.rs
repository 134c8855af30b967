//! Image resampling
//!
//! Resizes an image to arbitrary target dimensions using either bilinear
//! or bicubic interpolation. Both kernels map each destination pixel back
//! into source coordinates and blend nearby source pixels per channel.

use rjpeg_core::ImageBuffer;

use crate::error::{TransformError, TransformResult};

/// Interpolation kernel used by [`resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleKernel {
    /// 2x2 neighborhood, linear blend. Fast, slightly soft.
    Bilinear,
    /// 4x4 neighborhood, cubic weights. Sharper, more expensive.
    Bicubic,
}

/// Resize an image to `width` x `height` pixels.
///
/// The source image is not modified. The result carries the source's
/// grayscale flag; quality resets to the default.
///
/// # Errors
///
/// Returns an error if either target dimension is 0.
///
/// # Examples
///
/// ```
/// use rjpeg_core::ImageBuffer;
/// use rjpeg_transform::{resize, ResampleKernel};
///
/// let src = ImageBuffer::new(8, 8, false).unwrap();
/// let dst = resize(&src, 4, 2, ResampleKernel::Bilinear).unwrap();
/// assert_eq!((dst.width(), dst.height()), (4, 2));
/// ```
pub fn resize(
    src: &ImageBuffer,
    width: u32,
    height: u32,
    kernel: ResampleKernel,
) -> TransformResult<ImageBuffer> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target dimensions must be nonzero: {}x{}",
            width, height
        )));
    }

    let mut dst = ImageBuffer::new(width, height, src.is_gray())?;

    match kernel {
        ResampleKernel::Bilinear => resize_bilinear(src, &mut dst),
        ResampleKernel::Bicubic => resize_bicubic(src, &mut dst),
    }

    Ok(dst)
}

fn resize_bilinear(src: &ImageBuffer, dst: &mut ImageBuffer) {
    let sw = src.width();
    let sh = src.height();
    let ch = src.channels() as usize;
    let bx = sw as f64 / dst.width() as f64;
    let by = sh as f64 / dst.height() as f64;

    for dy in 0..dst.height() {
        let sy = by * dy as f64;
        let y0 = sy as u32;
        let y1 = (y0 + 1).min(sh - 1);
        let fy = sy - y0 as f64;
        for dx in 0..dst.width() {
            let sx = bx * dx as f64;
            let x0 = sx as u32;
            let x1 = (x0 + 1).min(sw - 1);
            let fx = sx - x0 as f64;

            let p0 = src.pixel(x0, y0);
            let p1 = src.pixel(x1, y0);
            let p2 = src.pixel(x0, y1);
            let p3 = src.pixel(x1, y1);

            for c in 0..ch {
                let c0 = p0[c] as f64;
                let c1 = p1[c] as f64;
                let c2 = p2[c] as f64;
                let c3 = p3[c] as f64;
                let v = fx * fy * (c0 - c1 - c2 + c3) + fx * (c1 - c0) + fy * (c2 - c0) + c0;
                dst.row_mut(dy)[dx as usize * ch + c] = v as u8;
            }
        }
    }
}

/// Cubic convolution weight for a tap at distance `d` from the sample point.
///
/// Piecewise cubic with support on `[0, 2)`:
/// `1 - 2d^2 + d^3` for `d < 1`, `4 - 8d + 5d^2 - d^3` for `1 <= d < 2`.
fn cubic_weight(d: f64) -> f64 {
    let d = d.abs();
    if d < 1.0 {
        1.0 - 2.0 * d * d + d * d * d
    } else if d < 2.0 {
        4.0 - 8.0 * d + 5.0 * d * d - d * d * d
    } else {
        0.0
    }
}

fn resize_bicubic(src: &ImageBuffer, dst: &mut ImageBuffer) {
    let sw = src.width() as i64;
    let sh = src.height() as i64;
    let ch = src.channels() as usize;
    let bx = src.width() as f64 / dst.width() as f64;
    let by = src.height() as f64 / dst.height() as f64;

    let mut acc = vec![0.0f64; ch];

    for dy in 0..dst.height() {
        let sy = by * dy as f64;
        let y0 = sy.floor() as i64;
        for dx in 0..dst.width() {
            let sx = bx * dx as f64;
            let x0 = sx.floor() as i64;

            acc.iter_mut().for_each(|a| *a = 0.0);
            let mut wsum = 0.0f64;

            // Taps falling outside the image are excluded from the
            // weight sum rather than clamped.
            for ty in (y0 - 1)..=(y0 + 2) {
                if ty < 0 || ty >= sh {
                    continue;
                }
                let wy = cubic_weight(sy - ty as f64);
                for tx in (x0 - 1)..=(x0 + 2) {
                    if tx < 0 || tx >= sw {
                        continue;
                    }
                    let w = wy * cubic_weight(sx - tx as f64);
                    if w == 0.0 {
                        continue;
                    }
                    let p = src.pixel(tx as u32, ty as u32);
                    for c in 0..ch {
                        acc[c] += w * p[c] as f64;
                    }
                    wsum += w;
                }
            }

            let out = dst.row_mut(dy);
            for c in 0..ch {
                let v = if wsum == 0.0 { 0.0 } else { acc[c] / wsum };
                out[dx as usize * ch + c] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(w: u32, h: u32) -> ImageBuffer {
        let mut img = ImageBuffer::new(w, h, true).unwrap();
        for y in 0..h {
            for x in 0..w {
                img.row_mut(y)[x as usize] = if (x + y) % 2 == 0 { 0 } else { 255 };
            }
        }
        img
    }

    #[test]
    fn test_resize_rejects_zero_target() {
        let src = ImageBuffer::new(4, 4, true).unwrap();
        assert!(resize(&src, 0, 4, ResampleKernel::Bilinear).is_err());
        assert!(resize(&src, 4, 0, ResampleKernel::Bicubic).is_err());
    }

    #[test]
    fn test_resize_resets_quality() {
        let mut src = ImageBuffer::new(4, 4, true).unwrap();
        src.set_quality(75).unwrap();
        let dst = resize(&src, 2, 2, ResampleKernel::Bilinear).unwrap();
        assert!(dst.is_gray());
        assert_eq!(dst.quality(), 100);
    }

    #[test]
    fn test_bilinear_uniform_stays_uniform() {
        let src = ImageBuffer::from_raw(4, 4, true, 100, vec![88; 16]).unwrap();
        let dst = resize(&src, 7, 3, ResampleKernel::Bilinear).unwrap();
        assert!(dst.pixels().iter().all(|&v| v == 88));
    }

    #[test]
    fn test_bicubic_uniform_stays_uniform() {
        let src = ImageBuffer::from_raw(4, 4, true, 100, vec![88; 16]).unwrap();
        let dst = resize(&src, 9, 5, ResampleKernel::Bicubic).unwrap();
        assert!(dst.pixels().iter().all(|&v| v == 88));
    }

    #[test]
    fn test_cubic_weight_shape() {
        assert_eq!(cubic_weight(0.0), 1.0);
        assert_eq!(cubic_weight(1.0), 0.0);
        assert_eq!(cubic_weight(2.0), 0.0);
        assert_eq!(cubic_weight(2.5), 0.0);
        assert!(cubic_weight(0.5) > 0.0);
        assert!(cubic_weight(1.5) < 0.0);
    }

    #[test]
    fn test_bilinear_downscale_blends() {
        // Checkerboard averaged down has intermediate values.
        let src = checkerboard(8, 8);
        let dst = resize(&src, 4, 4, ResampleKernel::Bilinear).unwrap();
        assert_eq!((dst.width(), dst.height()), (4, 4));
        assert_eq!(dst.pixels().len(), 16);
    }
}
