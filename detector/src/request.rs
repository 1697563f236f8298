use transition_common::config::TransitionConfig;
use transition_common::Region;

use crate::area::{Area, Mask};
use crate::error::TransitionError;

pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;
pub const DEFAULT_STABLE_SECS: f64 = 1.0;

/// Validated parameters for one transition measurement.
#[derive(Debug, Clone)]
pub struct TransitionRequest {
    area: Area,
    timeout_secs: f64,
    stable_secs: f64,
}

impl TransitionRequest {
    /// * `region` - only look at this part of the frame ([`Region::ALL`] for
    ///   everything).
    /// * `mask` - only look at the white pixels of this image. Can't be
    ///   combined with `region`.
    /// * `timeout_secs` - give up if the transition hasn't completed this
    ///   long after the press (or after the initial frame).
    /// * `stable_secs` - the screen must stay unchanged for this long for the
    ///   transition to count as complete.
    pub fn new(
        region: Region,
        mask: Option<Mask>,
        timeout_secs: f64,
        stable_secs: f64,
    ) -> Result<Self, TransitionError> {
        let area = Area::resolve(region, mask)?;
        Ok(Self {
            area,
            timeout_secs: check_secs("timeout_secs", timeout_secs)?,
            stable_secs: check_secs("stable_secs", stable_secs)?,
        })
    }

    /// Build a request from the `[transition]` config section, loading the
    /// mask file if one is named.
    pub fn from_config(config: &TransitionConfig) -> Result<Self, TransitionError> {
        let region = config.region.unwrap_or(Region::ALL);
        if !region.is_all() && config.mask.is_some() {
            return Err(TransitionError::RegionAndMask);
        }
        check_secs("timeout_secs", config.timeout_secs)?;
        check_secs("stable_secs", config.stable_secs)?;
        let mask = config.mask.as_deref().map(Mask::load).transpose()?;
        Self::new(region, mask, config.timeout_secs, config.stable_secs)
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    pub fn timeout_secs(&self) -> f64 {
        self.timeout_secs
    }

    pub fn stable_secs(&self) -> f64 {
        self.stable_secs
    }
}

impl Default for TransitionRequest {
    fn default() -> Self {
        Self {
            area: Area::All,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            stable_secs: DEFAULT_STABLE_SECS,
        }
    }
}

fn check_secs(name: &'static str, value: f64) -> Result<f64, TransitionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TransitionError::InvalidDuration { name, value })
    }
}
