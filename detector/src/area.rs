use std::fmt;
use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, ImageReader, RgbImage};
use tracing::debug;
use transition_common::{Frame, Region};

use crate::error::TransitionError;

/// Per-pixel inclusion mask.
///
/// Stored as an RGB image normalised so that every channel is either `0xFF`
/// (analyse) or `0x00` (ignore). ANDing it with a difference image keeps the
/// selected deltas untouched and zeroes the rest.
#[derive(Clone)]
pub struct Mask {
    image: RgbImage,
}

impl Mask {
    pub fn from_image(image: DynamicImage) -> Self {
        let mut image = image.to_rgb8();
        for value in image.iter_mut() {
            *value = if *value == 0 { 0x00 } else { 0xFF };
        }
        Self { image }
    }

    /// Load a black & white mask image from disk.
    pub fn load(path: &Path) -> Result<Self, TransitionError> {
        let map_err = |source| TransitionError::MaskLoad {
            path: path.display().to_string(),
            source,
        };
        let img = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| map_err(image::ImageError::IoError(e)))?
            .decode()
            .map_err(map_err)?;
        debug!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            "loaded mask"
        );
        Ok(Self::from_image(img))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub(crate) fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mask")
            .field("dimensions", &self.dimensions())
            .finish_non_exhaustive()
    }
}

/// The part of each frame that the diff classifier looks at.
#[derive(Debug, Clone, Default)]
pub enum Area {
    #[default]
    All,
    Region(Region),
    Mask(Arc<Mask>),
}

impl Area {
    /// Combine a region and an optional mask into a single comparison area.
    ///
    /// Fails if both are given: a mask already says which pixels matter, so
    /// a region on top of it is ambiguous.
    pub fn resolve(region: Region, mask: Option<Mask>) -> Result<Self, TransitionError> {
        match (region.is_all(), mask) {
            (false, Some(_)) => Err(TransitionError::RegionAndMask),
            (true, Some(mask)) => Ok(Area::Mask(Arc::new(mask))),
            (false, None) => Ok(Area::Region(region)),
            (true, None) => Ok(Area::All),
        }
    }

    /// Rectangle of pixels to scan inside `bounds`, or `None` if the area
    /// doesn't overlap the frame at all.
    pub fn clip(&self, bounds: &Region) -> Option<Region> {
        match self {
            Area::Region(region) => bounds.intersect(region),
            Area::Mask(mask) => {
                let (width, height) = mask.dimensions();
                bounds.intersect(&Region::new(0, 0, width, height))
            }
            Area::All => Some(*bounds),
        }
    }

    pub fn mask(&self) -> Option<&Mask> {
        match self {
            Area::Mask(mask) => Some(mask),
            _ => None,
        }
    }

    /// Check that a frame can be compared under this area.
    pub fn check(&self, frame: &Frame) -> Result<(), TransitionError> {
        if let Some(mask) = self.mask() {
            if mask.dimensions() != frame.dimensions() {
                return Err(TransitionError::MaskSize {
                    mask: mask.dimensions(),
                    frame: frame.dimensions(),
                });
            }
        }
        Ok(())
    }
}
