use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use transition_common::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionStatus {
    /// The screen didn't change within the timeout after the press.
    StartTimeout,
    /// The screen started changing but didn't settle within the timeout.
    StableTimeout,
    /// The screen changed and then stayed still for the stable duration.
    Complete,
}

impl fmt::Display for TransitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransitionStatus::StartTimeout => "START_TIMEOUT",
            TransitionStatus::StableTimeout => "STABLE_TIMEOUT",
            TransitionStatus::Complete => "COMPLETE",
        })
    }
}

/// Outcome of a transition measurement.
///
/// All times are seconds since the Unix epoch, comparable with the frame
/// timestamps they were taken from.
#[derive(Clone)]
pub struct TransitionResult {
    frame: Frame,
    status: TransitionStatus,
    press_time: Option<f64>,
    animation_start_time: Option<f64>,
    end_time: Option<f64>,
}

impl TransitionResult {
    pub(crate) fn new(
        frame: Frame,
        status: TransitionStatus,
        press_time: Option<f64>,
        animation_start_time: Option<f64>,
        end_time: Option<f64>,
    ) -> Self {
        Self {
            frame,
            status,
            press_time,
            animation_start_time,
            end_time,
        }
    }

    pub(crate) fn with_press_time(self, press_time: f64) -> Self {
        Self {
            press_time: Some(press_time),
            ..self
        }
    }

    /// On success, the first frame of the stable screen; otherwise the last
    /// frame seen.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn status(&self) -> TransitionStatus {
        self.status
    }

    /// When the key-press completed.
    pub fn press_time(&self) -> Option<f64> {
        self.press_time
    }

    /// When the screen first changed.
    pub fn animation_start_time(&self) -> Option<f64> {
        self.animation_start_time
    }

    /// When the screen stopped changing. `None` unless complete.
    pub fn end_time(&self) -> Option<f64> {
        self.end_time
    }

    /// Time from the press to the end of the transition.
    pub fn duration(&self) -> Option<f64> {
        Some(self.end_time? - self.press_time?)
    }

    /// Time from the start of the animation to its end.
    pub fn animation_duration(&self) -> Option<f64> {
        Some(self.end_time? - self.animation_start_time?)
    }

    pub fn is_complete(&self) -> bool {
        self.status == TransitionStatus::Complete
    }
}

struct Secs(Option<f64>);

impl fmt::Display for Secs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(t) => write!(f, "{t:.3}"),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Debug for TransitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransitionResult(frame=<Frame>, status={}, press_time={}, \
             animation_start_time={}, end_time={})",
            self.status,
            Secs(self.press_time),
            Secs(self.animation_start_time),
            Secs(self.end_time),
        )
    }
}

/// Like `Debug`, but also lists the derived durations.
impl fmt::Display for TransitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransitionResult(frame=<Frame>, status={}, press_time={}, \
             animation_start_time={}, end_time={}, duration={}, animation_duration={})",
            self.status,
            Secs(self.press_time),
            Secs(self.animation_start_time),
            Secs(self.end_time),
            Secs(self.duration()),
            Secs(self.animation_duration()),
        )
    }
}

impl Serialize for TransitionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TransitionResult", 8)?;
        s.serialize_field("status", &self.status)?;
        s.serialize_field("frame_time", &self.frame.time)?;
        s.serialize_field("frame_size", &self.frame.dimensions())?;
        s.serialize_field("press_time", &self.press_time)?;
        s.serialize_field("animation_start_time", &self.animation_start_time)?;
        s.serialize_field("end_time", &self.end_time)?;
        s.serialize_field("duration", &self.duration())?;
        s.serialize_field("animation_duration", &self.animation_duration())?;
        s.end()
    }
}
