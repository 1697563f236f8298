use image::{Rgb, RgbImage};
use transition_common::Frame;

/// Uniform grey frame.
pub fn frame(width: u32, height: u32, value: u8, time: f64) -> Frame {
    Frame::new(RgbImage::from_pixel(width, height, Rgb([value; 3])), time)
}

/// Copy of `base` at a new time with some pixels overwritten.
pub fn paint(base: &Frame, pixels: &[(u32, u32, [u8; 3])], time: f64) -> Frame {
    let mut img = base.image().clone();
    for &(x, y, rgb) in pixels {
        img.put_pixel(x, y, Rgb(rgb));
    }
    Frame::new(img, time)
}
