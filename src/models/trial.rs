use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log_warn;
use crate::models::{Drawing, FatigueRating, SamplePoint};
use crate::scoring::{calculate_mse, ScoreFeedback, ScoringConfig};

const ENABLE_LOGS: bool = true;

/// Per-trial metadata handed to display and export.
///
/// Key names are a compatibility surface with previously exported sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialMetadata {
    /// Sortable capture-time label, e.g. `2024-05-01T09:30:00Z`.
    pub trial_id: String,
    /// Only present for trials outside the warm-up window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatigue_rating: Option<FatigueRating>,
    /// Finite, non-negative score; absent when the stroke could not be scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mse: Option<f64>,
    pub raw_points_file: String,
}

impl TrialMetadata {
    pub fn trial_id_for(timestamp: DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// `circle-YYYYMMDD-HHMM.json`. Two captures in the same minute share a
    /// name.
    pub fn raw_points_file_for(timestamp: DateTime<Utc>) -> String {
        timestamp.format("circle-%Y%m%d-%H%M.json").to_string()
    }
}

/// One finalized drawing attempt.
///
/// Everything except the `trial_id` label is fixed at capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trial {
    id: Uuid,
    drawing: Drawing,
    timestamp: DateTime<Utc>,
    metadata: TrialMetadata,
}

impl Trial {
    /// Build a trial from a finished drawing and score it synchronously.
    ///
    /// Sparse or degenerate strokes still produce a trial; their score is
    /// left absent.
    pub fn capture(
        drawing: Drawing,
        timestamp: DateTime<Utc>,
        fatigue_rating: Option<FatigueRating>,
        config: &ScoringConfig,
    ) -> Self {
        let trial_id = TrialMetadata::trial_id_for(timestamp);

        let mse = match calculate_mse(&drawing.points(), config) {
            Ok(mse) if mse.is_finite() && mse >= 0.0 => Some(mse),
            Ok(mse) => {
                log_warn!("Discarding non-finite score {mse} for trial {trial_id}");
                None
            }
            Err(err) => {
                log_warn!("Trial {trial_id} has no score: {err}");
                None
            }
        };

        let metadata = TrialMetadata {
            raw_points_file: TrialMetadata::raw_points_file_for(timestamp),
            trial_id,
            fatigue_rating,
            mse,
        };

        Self {
            id: Uuid::new_v4(),
            drawing,
            timestamp,
            metadata,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn metadata(&self) -> &TrialMetadata {
        &self.metadata
    }

    pub fn trial_id(&self) -> &str {
        &self.metadata.trial_id
    }

    pub fn mse(&self) -> Option<f64> {
        self.metadata.mse
    }

    /// Score with one decimal place, or `N/A`.
    pub fn mse_display(&self) -> String {
        match self.metadata.mse {
            Some(mse) => format!("{mse:.1}"),
            None => "N/A".to_string(),
        }
    }

    pub fn feedback(&self) -> Option<ScoreFeedback> {
        self.metadata.mse.map(ScoreFeedback::from_mse)
    }

    /// Raw samples in capture order, as written to `raw_points_file`.
    pub fn stroke_points(&self) -> Vec<SamplePoint> {
        self.drawing.points()
    }

    /// Replace the identifying label. Score and strokes are untouched.
    pub fn rename(&mut self, label: impl Into<String>) {
        self.metadata.trial_id = label.into();
    }
}
