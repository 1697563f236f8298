use std::path::{Path, PathBuf};

use image::ImageReader;
use tracing::debug;
use transition_detector::{Actuator, BoxError, Frame, FrameSource, TriggerResult};

use crate::ReplayError;

/// One recorded frame on disk, named `{captured_at_ms}.{ext}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFrame {
    pub captured_at_ms: i64,
    pub path: PathBuf,
}

impl CapturedFrame {
    pub fn load(&self) -> Result<Frame, ReplayError> {
        let decode_err = |source| ReplayError::Decode {
            path: self.path.display().to_string(),
            source,
        };
        let img = ImageReader::open(&self.path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;
        Ok(Frame::from_millis(img.to_rgb8(), self.captured_at_ms))
    }
}

/// List the frames in a capture directory, oldest first.
///
/// Hidden files are ignored. Any other file must be named after its capture
/// timestamp, and timestamps must be unique.
pub fn scan(dir: &Path) -> Result<Vec<CapturedFrame>, ReplayError> {
    let read_err = |e| ReplayError::ReadDir(dir.display().to_string(), e);
    let mut frames = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return Err(ReplayError::BadFileName(path.display().to_string()));
        };
        if stem.starts_with('.') || stem.is_empty() {
            continue;
        }
        let captured_at_ms = stem
            .parse::<i64>()
            .map_err(|_| ReplayError::BadFileName(path.display().to_string()))?;
        frames.push(CapturedFrame {
            captured_at_ms,
            path,
        });
    }
    frames.sort_by_key(|f| f.captured_at_ms);
    if let Some(pair) = frames
        .windows(2)
        .find(|w| w[0].captured_at_ms == w[1].captured_at_ms)
    {
        return Err(ReplayError::DuplicateTimestamp(pair[0].captured_at_ms));
    }
    Ok(frames)
}

/// Replays a capture directory as a frame stream, decoding one file per
/// pull.
pub struct DirectorySource {
    frames: std::vec::IntoIter<CapturedFrame>,
}

impl DirectorySource {
    pub fn new(frames: Vec<CapturedFrame>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl FrameSource for DirectorySource {
    fn next_frame(&mut self) -> Result<Option<Frame>, BoxError> {
        match self.frames.next() {
            Some(captured) => {
                debug!(ts = captured.captured_at_ms, path = %captured.path.display(), "decoding frame");
                Ok(Some(captured.load()?))
            }
            None => Ok(None),
        }
    }
}

/// Stands in for the key press of a recorded session: the press has already
/// happened at `press_at_ms`, and the reference frame is the last recorded
/// frame before it.
pub struct ReplayActuator {
    frames: Vec<CapturedFrame>,
    press_at_ms: i64,
}

impl ReplayActuator {
    pub fn new(frames: Vec<CapturedFrame>, press_at_ms: i64) -> Self {
        Self {
            frames,
            press_at_ms,
        }
    }
}

impl Actuator for ReplayActuator {
    fn press(&mut self, action: &str) -> Result<TriggerResult, BoxError> {
        let reference = self
            .frames
            .iter()
            .rev()
            .find(|f| f.captured_at_ms < self.press_at_ms)
            .ok_or(ReplayError::NoFrameBeforePress(self.press_at_ms))?;
        debug!(
            action,
            press_at_ms = self.press_at_ms,
            reference_ms = reference.captured_at_ms,
            "replaying press"
        );
        Ok(TriggerResult {
            action: action.to_string(),
            completion_time: self.press_at_ms as f64 / 1000.0,
            reference_frame: reference.load()?,
        })
    }
}
