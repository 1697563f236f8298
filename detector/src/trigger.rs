use transition_common::Frame;

use crate::source::BoxError;

/// What the actuator reports after performing an action.
#[derive(Debug, Clone)]
pub struct TriggerResult {
    /// Name of the action, e.g. `"KEY_OK"`.
    pub action: String,
    /// When the action completed, on the same clock as frame timestamps.
    pub completion_time: f64,
    /// Last frame seen before the action could have had any effect.
    pub reference_frame: Frame,
}

/// Performs the action that kicks off a transition (typically a key press
/// on the device under test).
pub trait Actuator {
    fn press(&mut self, action: &str) -> Result<TriggerResult, BoxError>;
}

impl<F> Actuator for F
where
    F: FnMut(&str) -> Result<TriggerResult, BoxError>,
{
    fn press(&mut self, action: &str) -> Result<TriggerResult, BoxError> {
        self(action)
    }
}
