//! Shape-only deviation scoring for repeated circle-drawing trials.
//!
//! A capture layer hands over finished drawings; each becomes a [`Trial`]
//! scored by how far its shape deviates from a circle of the configured
//! target radius, independent of where and how large it was drawn. Trials
//! are collected in a [`Session`] whose first five attempts are warm-up and
//! never exported.

pub mod export;
pub mod geometry;
pub mod models;
pub mod scoring;
pub mod settings;
pub mod store;
pub mod utils;

pub use export::{export_session, export_session_to_temp, ExportManifest, SessionMetadata};
pub use geometry::Point;
pub use models::{
    Drawing, FatigueRating, SamplePoint, Session, SessionError, Stroke, Trial, TrialMetadata,
    WARMUP_TRIALS,
};
pub use scoring::{calculate_mse, ScoreFeedback, ScoringConfig, ScoringError};
pub use settings::SettingsStore;
pub use store::SessionStore;

/// Install `env_logger` at info level; `RUST_LOG` refines it.
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}
