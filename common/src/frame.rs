use std::fmt;
use std::sync::Arc;

use image::RgbImage;
use serde::{Deserialize, Serialize};

/// A decoded video frame with its capture timestamp.
///
/// Pixels are 8-bit RGB, row-major. The buffer is shared, so cloning a frame
/// (e.g. to keep it as the representative frame of a result) is cheap.
///
/// `time` is seconds since the Unix epoch, the same clock that the actuator
/// uses for key-press completion times.
#[derive(Clone)]
pub struct Frame {
    image: Arc<RgbImage>,
    pub time: f64,
}

impl Frame {
    pub fn new(image: RgbImage, time: f64) -> Self {
        Self {
            image: Arc::new(image),
            time,
        }
    }

    /// Build a frame from a raw RGB buffer of `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>, time: f64) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * 3;
        let got = data.len();
        match RgbImage::from_raw(width, height, data) {
            Some(image) if got == expected => Ok(Self::new(image, time)),
            _ => Err(FrameError::BufferSize { got, expected }),
        }
    }

    /// Build a frame from a capture timestamp in Unix milliseconds.
    pub fn from_millis(image: RgbImage, captured_at_ms: i64) -> Self {
        Self::new(image, captured_at_ms as f64 / 1000.0)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Full-frame rectangle, used to clip regions of interest.
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, self.width(), self.height())
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("time", &self.time)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// A rectangle in frame coordinates, or [`Region::ALL`] for the whole frame.
///
/// Coordinates may be negative or extend past the frame edge; they are
/// clipped against the frame with [`Region::intersect`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Sentinel covering every pixel of any frame.
    pub const ALL: Region = Region {
        x: i32::MIN,
        y: i32::MIN,
        width: u32::MAX,
        height: u32::MAX,
    };

    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_all(&self) -> bool {
        *self == Region::ALL
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Overlap of two regions, or `None` if they don't share any pixel.
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let x = (self.x as i64).max(other.x as i64);
        let y = (self.y as i64).max(other.y as i64);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return None;
        }
        Some(Region {
            x: x as i32,
            y: y as i32,
            width: (right - x) as u32,
            height: (bottom - y) as u32,
        })
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::ALL
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("frame buffer has wrong size: got {got} bytes, expected {expected}")]
    BufferSize { got: usize, expected: usize },
}
