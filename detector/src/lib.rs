//! Detection and frame-accurate timing of on-screen transitions (animations,
//! menu movements, screens populating) in a live video stream.
//!
//! The entry points are [`press_and_wait`] and [`wait_for_transition_to_end`].

pub mod area;
pub mod diagnostics;
pub mod diff;
pub mod error;
pub mod request;
pub mod result;
pub mod source;
pub mod transition;
pub mod trigger;

#[cfg(test)]
mod test_support;

pub use area::{Area, Mask};
pub use diagnostics::{DiagnosticsSink, MemorySink, NullSink, TracingSink};
pub use error::TransitionError;
pub use request::TransitionRequest;
pub use result::{TransitionResult, TransitionStatus};
pub use source::{BoxError, FrameSource, IterSource, ScriptedSource};
pub use transition::{press_and_wait, wait_for_transition_to_end, Phase, Transition};
pub use trigger::{Actuator, TriggerResult};
pub use transition_common::{Frame, Region};
