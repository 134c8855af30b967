//! Synthetic image builders for tests

use rjpeg_core::ImageBuffer;

/// A single-color RGB image.
pub fn uniform_rgb(width: u32, height: u32, rgb: [u8; 3]) -> ImageBuffer {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for _ in 0..width as usize * height as usize {
        pixels.extend_from_slice(&rgb);
    }
    ImageBuffer::from_raw(width, height, false, 100, pixels).unwrap()
}

/// A single-value gray image.
pub fn uniform_gray(width: u32, height: u32, value: u8) -> ImageBuffer {
    let len = width as usize * height as usize;
    ImageBuffer::from_raw(width, height, true, 100, vec![value; len]).unwrap()
}

/// A gray image ramping left to right from 0 toward 255.
pub fn gradient_gray(width: u32, height: u32) -> ImageBuffer {
    let mut img = ImageBuffer::new(width, height, true).unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = (x as u64 * 255 / (width as u64 - 1).max(1)) as u8;
            img.row_mut(y)[x as usize] = v;
        }
    }
    img
}

/// An RGB image with a horizontal red ramp and vertical green ramp.
pub fn gradient_rgb(width: u32, height: u32) -> ImageBuffer {
    let mut img = ImageBuffer::new(width, height, false).unwrap();
    for y in 0..height {
        let g = (y as u64 * 255 / (height as u64 - 1).max(1)) as u8;
        for x in 0..width {
            let r = (x as u64 * 255 / (width as u64 - 1).max(1)) as u8;
            let row = img.row_mut(y);
            row[x as usize * 3] = r;
            row[x as usize * 3 + 1] = g;
            row[x as usize * 3 + 2] = 64;
        }
    }
    img
}

/// A gray image with a uniform `margin`-wide frame around a different
/// uniform interior.
pub fn framed_gray(width: u32, height: u32, margin: u32, frame: u8, inner: u8) -> ImageBuffer {
    assert!(2 * margin < width && 2 * margin < height);
    let mut img = uniform_gray(width, height, frame);
    for y in margin..height - margin {
        for x in margin..width - margin {
            img.row_mut(y)[x as usize] = inner;
        }
    }
    img
}
