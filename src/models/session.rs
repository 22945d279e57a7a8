//! A sitting of consecutive trials.
//!
//! Warm-up membership is positional: the first [`WARMUP_TRIALS`] trials in
//! the current order are practice and never exported. Removing an early
//! trial pulls the next one into the window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::log_debug;
use crate::models::{Drawing, FatigueRating, Trial};
use crate::scoring::ScoringConfig;

const ENABLE_LOGS: bool = true;

/// Leading trials treated as practice.
pub const WARMUP_TRIALS: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("trial {0} not found in session")]
    NotFound(Uuid),

    #[error("trial {0} is already in the session")]
    DuplicateTrial(Uuid),

    #[error("fatigue rating must be between 1 and 10, got {0}")]
    InvalidFatigueRating(u8),

    #[error("session fatigue rating has already been recorded")]
    FatigueAlreadyRecorded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SessionData")]
pub struct Session {
    id: Uuid,
    trials: Vec<Trial>,
    created: DateTime<Utc>,
    fatigue_rating: Option<FatigueRating>,
}

/// Unchecked wire form of [`Session`]; trial ids must be unique.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionData {
    id: Uuid,
    trials: Vec<Trial>,
    created: DateTime<Utc>,
    fatigue_rating: Option<FatigueRating>,
}

impl TryFrom<SessionData> for Session {
    type Error = SessionError;

    fn try_from(data: SessionData) -> Result<Self, Self::Error> {
        let mut session = Session {
            id: data.id,
            trials: Vec::with_capacity(data.trials.len()),
            created: data.created,
            fatigue_rating: data.fatigue_rating,
        };
        for trial in data.trials {
            session.append(trial)?;
        }
        Ok(session)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Utc::now(), None)
    }
}

impl Session {
    pub fn new(created: DateTime<Utc>, fatigue_rating: Option<FatigueRating>) -> Self {
        Self {
            id: Uuid::new_v4(),
            trials: Vec::new(),
            created,
            fatigue_rating,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn fatigue_rating(&self) -> Option<FatigueRating> {
        self.fatigue_rating
    }

    /// Record the session-level rating taken at the start of the sitting.
    pub fn record_fatigue_rating(&mut self, rating: FatigueRating) -> Result<(), SessionError> {
        if self.fatigue_rating.is_some() {
            return Err(SessionError::FatigueAlreadyRecorded);
        }
        self.fatigue_rating = Some(rating);
        Ok(())
    }

    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    pub fn get(&self, trial_id: Uuid) -> Option<&Trial> {
        self.trials.iter().find(|t| t.id() == trial_id)
    }

    fn position(&self, trial_id: Uuid) -> Result<usize, SessionError> {
        self.trials
            .iter()
            .position(|t| t.id() == trial_id)
            .ok_or(SessionError::NotFound(trial_id))
    }

    pub fn append(&mut self, trial: Trial) -> Result<(), SessionError> {
        if self.get(trial.id()).is_some() {
            return Err(SessionError::DuplicateTrial(trial.id()));
        }
        log_debug!(
            "Session {}: appended trial {} at position {}",
            self.id,
            trial.id(),
            self.trials.len()
        );
        self.trials.push(trial);
        Ok(())
    }

    /// Capture a drawing as the next trial.
    ///
    /// The session fatigue rating is copied onto the trial only when it lands
    /// outside the warm-up window.
    pub fn record_trial(
        &mut self,
        drawing: Drawing,
        timestamp: DateTime<Utc>,
        config: &ScoringConfig,
    ) -> Result<&Trial, SessionError> {
        let rating = if self.warmup_remaining() == 0 {
            self.fatigue_rating
        } else {
            None
        };

        let trial = Trial::capture(drawing, timestamp, rating, config);
        let trial_id = trial.id();
        self.append(trial)?;
        self.get(trial_id).ok_or(SessionError::NotFound(trial_id))
    }

    pub fn remove(&mut self, trial_id: Uuid) -> Result<Trial, SessionError> {
        let index = self.position(trial_id)?;
        let removed = self.trials.remove(index);
        log_debug!("Session {}: removed trial {} from position {}", self.id, trial_id, index);
        Ok(removed)
    }

    pub fn rename(
        &mut self,
        trial_id: Uuid,
        new_label: impl Into<String>,
    ) -> Result<(), SessionError> {
        let index = self.position(trial_id)?;
        self.trials[index].rename(new_label);
        Ok(())
    }

    /// Trials eligible for export: everything after the warm-up window.
    pub fn export_view(&self) -> &[Trial] {
        let skip = WARMUP_TRIALS.min(self.trials.len());
        &self.trials[skip..]
    }

    pub fn warmup_trials(&self) -> &[Trial] {
        let end = WARMUP_TRIALS.min(self.trials.len());
        &self.trials[..end]
    }

    pub fn is_warmup(&self, trial_id: Uuid) -> Result<bool, SessionError> {
        self.position(trial_id).map(|index| index < WARMUP_TRIALS)
    }

    /// Warm-up trials still to be drawn before trials count.
    pub fn warmup_remaining(&self) -> usize {
        WARMUP_TRIALS.saturating_sub(self.trials.len())
    }
}
