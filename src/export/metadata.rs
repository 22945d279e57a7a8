use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FatigueRating, Session, Trial};

/// Exported summary of one counted trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialExportMetadata {
    pub trial_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatigue_rating: Option<FatigueRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mse: Option<f64>,
    pub raw_points_file: String,
}

impl From<&Trial> for TrialExportMetadata {
    fn from(trial: &Trial) -> Self {
        let metadata = trial.metadata();
        Self {
            trial_id: metadata.trial_id.clone(),
            fatigue_rating: metadata.fatigue_rating,
            mse: metadata.mse,
            raw_points_file: metadata.raw_points_file.clone(),
        }
    }
}

/// Contents of `session-metadata.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Uppercase hyphenated UUID.
    pub session_id: String,
    #[serde(with = "reference_date_seconds")]
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatigue_rating: Option<FatigueRating>,
    pub trials: Vec<TrialExportMetadata>,
}

impl SessionMetadata {
    /// Metadata for the session's exportable trials only.
    pub fn from_session(session: &Session) -> Self {
        Self {
            session_id: session.id().hyphenated().to_string().to_uppercase(),
            created: session.created(),
            fatigue_rating: session.fatigue_rating(),
            trials: session
                .export_view()
                .iter()
                .map(TrialExportMetadata::from)
                .collect(),
        }
    }
}

/// `created` is stored as fractional seconds since 2001-01-01T00:00:00Z,
/// the encoding earlier session files were written with.
pub mod reference_date_seconds {
    use super::*;
    use serde::{de, Deserializer, Serializer};

    /// 2001-01-01T00:00:00Z as a Unix timestamp.
    pub const REFERENCE_UNIX_SECONDS: i64 = 978_307_200;

    pub fn to_seconds(value: &DateTime<Utc>) -> f64 {
        let delta = value.timestamp() - REFERENCE_UNIX_SECONDS;
        delta as f64 + f64::from(value.timestamp_subsec_nanos()) / 1e9
    }

    pub fn from_seconds(seconds: f64) -> Option<DateTime<Utc>> {
        if !seconds.is_finite() {
            return None;
        }
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
        Utc.timestamp_opt(REFERENCE_UNIX_SECONDS + whole as i64, nanos)
            .single()
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(to_seconds(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        from_seconds(seconds)
            .ok_or_else(|| de::Error::custom(format!("invalid reference-date seconds {seconds}")))
    }
}
