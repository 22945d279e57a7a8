use serde::{Deserialize, Serialize};

use crate::log_warn;
use crate::scoring::ScoringError;

const ENABLE_LOGS: bool = true;

pub const TARGET_RADIUS_ENV: &str = "CIRCLESCORE_TARGET_RADIUS";
pub const N_ANGLES_ENV: &str = "CIRCLESCORE_N_ANGLES";

/// Tunable parameters of the shape-deviation score.
///
/// `target_radius` must stay fixed across every trial being compared: the
/// score is expressed in squared units of this radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Radius of the reference guide circle, in drawing-surface units.
    pub target_radius: f64,

    /// Number of evenly spaced angles in the resampled radius profile.
    pub n_angles: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            target_radius: 250.0,
            n_angles: 360,
        }
    }
}

impl ScoringConfig {
    pub fn new(target_radius: f64, n_angles: usize) -> Self {
        Self {
            target_radius,
            n_angles,
        }
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if !(self.target_radius.is_finite() && self.target_radius > 0.0) {
            return Err(ScoringError::InvalidConfig(format!(
                "target_radius must be finite and positive, got {}",
                self.target_radius
            )));
        }
        if self.n_angles == 0 {
            return Err(ScoringError::InvalidConfig(
                "n_angles must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Apply `CIRCLESCORE_TARGET_RADIUS` / `CIRCLESCORE_N_ANGLES` when set.
    /// Unparseable values are logged and ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(TARGET_RADIUS_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(value) => self.target_radius = value,
                Err(err) => log_warn!("Ignoring {TARGET_RADIUS_ENV}={raw:?}: {err}"),
            }
        }
        if let Some(raw) = lookup(N_ANGLES_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(value) => self.n_angles = value,
                Err(err) => log_warn!("Ignoring {N_ANGLES_ENV}={raw:?}: {err}"),
            }
        }
        self
    }
}
