use transition_common::Frame;

use crate::area::Area;

/// More than this many differing channel values counts as a change.
pub const MAX_NOISY_PIXELS: usize = 50;

/// A single channel differing by more than this counts as a change.
pub const MAX_NOISE_MAGNITUDE: u8 = 20;

/// Summary of the absolute difference between two frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Non-zero entries of the masked difference image, counted per channel.
    pub nonzero_channels: usize,
    /// Largest single-channel difference.
    pub max_delta: u8,
}

impl DiffStats {
    /// Widespread low-level noise is ignored by the channel count, but a few
    /// pixels flipping hard (e.g. a blinking cursor) still trip the
    /// magnitude check.
    pub fn is_changed(&self) -> bool {
        self.nonzero_channels > MAX_NOISY_PIXELS || self.max_delta > MAX_NOISE_MAGNITUDE
    }
}

/// Compare two frames inside `area`.
///
/// The per-channel absolute difference is cropped to the area's rectangle
/// and then ANDed with the mask, if any. Pixels outside either frame are
/// never compared.
pub fn diff_stats(a: &Frame, b: &Frame, area: &Area) -> DiffStats {
    let Some(bounds) = a.bounds().intersect(&b.bounds()) else {
        return DiffStats::default();
    };
    let Some(rect) = area.clip(&bounds) else {
        return DiffStats::default();
    };

    let (a_raw, a_stride) = (a.image().as_raw(), a.width() as usize * 3);
    let (b_raw, b_stride) = (b.image().as_raw(), b.width() as usize * 3);
    let mask = area.mask().map(|m| (m.as_raw(), m.dimensions().0 as usize * 3));

    let x0 = rect.x as usize * 3;
    let x1 = x0 + rect.width as usize * 3;
    let mut stats = DiffStats::default();

    for y in rect.y as usize..rect.y as usize + rect.height as usize {
        let row_a = &a_raw[y * a_stride + x0..y * a_stride + x1];
        let row_b = &b_raw[y * b_stride + x0..y * b_stride + x1];
        let row_mask = mask.map(|(raw, stride)| &raw[y * stride + x0..y * stride + x1]);

        for (i, (pa, pb)) in row_a.chunks_exact(3).zip(row_b.chunks_exact(3)).enumerate() {
            for c in 0..3 {
                let mut delta = pa[c].abs_diff(pb[c]);
                if let Some(m) = row_mask {
                    delta &= m[i * 3 + c];
                }
                if delta > 0 {
                    stats.nonzero_channels += 1;
                    stats.max_delta = stats.max_delta.max(delta);
                }
            }
        }
    }
    stats
}

/// Changed/unchanged verdict for a pair of frames.
pub fn changed(a: &Frame, b: &Frame, area: &Area) -> bool {
    diff_stats(a, b, area).is_changed()
}
