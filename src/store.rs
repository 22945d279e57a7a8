use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Drawing, FatigueRating, Session, SessionError, Trial};
use crate::scoring::ScoringConfig;
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// Shared handle to the live session.
///
/// Mutations hold the write lock for their whole duration, so append,
/// remove and rename never interleave. Reads hand back owned copies. Every
/// trial recorded through the store is scored with the same config.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
    config: Arc<ScoringConfig>,
}

impl SessionStore {
    pub fn new(session: Session, config: ScoringConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Capture a finished drawing as the next trial and return a copy of it.
    pub fn record_trial(
        &self,
        drawing: Drawing,
        timestamp: DateTime<Utc>,
    ) -> Result<Trial, SessionError> {
        let mut session = self.write();
        let trial = session.record_trial(drawing, timestamp, &self.config)?.clone();
        log_info!(
            "Recorded trial {} ({} of session {}), mse {}",
            trial.trial_id(),
            session.len(),
            session.id(),
            trial.mse_display()
        );
        Ok(trial)
    }

    pub fn append(&self, trial: Trial) -> Result<(), SessionError> {
        self.write().append(trial)
    }

    pub fn remove(&self, trial_id: Uuid) -> Result<Trial, SessionError> {
        self.write().remove(trial_id).inspect_err(|err| {
            log_warn!("Remove failed: {err}");
        })
    }

    pub fn rename(&self, trial_id: Uuid, new_label: impl Into<String>) -> Result<(), SessionError> {
        self.write().rename(trial_id, new_label).inspect_err(|err| {
            log_warn!("Rename failed: {err}");
        })
    }

    pub fn record_fatigue_rating(&self, rating: FatigueRating) -> Result<(), SessionError> {
        self.write().record_fatigue_rating(rating)
    }

    pub fn export_view(&self) -> Vec<Trial> {
        self.read().export_view().to_vec()
    }

    pub fn trials(&self) -> Vec<Trial> {
        self.read().trials().to_vec()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Owned copy of the whole session, e.g. for export.
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }
}
