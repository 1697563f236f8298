use crate::source::BoxError;
use crate::transition::Phase;

#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("you can't specify region and mask at the same time")]
    RegionAndMask,
    #[error("{name} must be a finite, non-negative number of seconds, got {value}")]
    InvalidDuration { name: &'static str, value: f64 },
    #[error("failed to load mask {path}: {source}")]
    MaskLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("mask is {mask:?} pixels but frames are {frame:?}")]
    MaskSize { mask: (u32, u32), frame: (u32, u32) },
    #[error("frame at {time:.3} is {got:?} pixels, expected {expected:?}")]
    FrameSize {
        time: f64,
        expected: (u32, u32),
        got: (u32, u32),
    },
    #[error("frame source failed: {0}")]
    Source(#[source] BoxError),
    #[error("actuator failed: {0}")]
    Actuator(#[source] BoxError),
    #[error("frame stream ended while waiting in {phase}")]
    StreamExhausted { phase: Phase },
}

impl TransitionError {
    /// True for errors raised while building a request, before any frame
    /// was pulled.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TransitionError::RegionAndMask
                | TransitionError::InvalidDuration { .. }
                | TransitionError::MaskLoad { .. }
        )
    }
}
