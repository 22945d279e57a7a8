//! Shape-only deviation score for a drawn circle.
//!
//! The pipeline removes translation and uniform scale (`normalizer`),
//! resamples the cloud into a fixed radius-per-angle profile (`resampler`)
//! and reduces that profile to a mean squared deviation from the target
//! radius (`deviation`). Sampling order is ignored.

pub mod config;
pub mod deviation;
pub mod error;
pub mod normalizer;
pub mod resampler;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::models::SamplePoint;

pub use config::ScoringConfig;
pub use deviation::mean_squared_deviation;
pub use error::ScoringError;
pub use normalizer::{normalize, NormalizedShape, MIN_POINTS};
pub use resampler::{reference_angles, resample_uniform_angles};

/// Intermediate values of one scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub mse: f64,
    pub centroid: Point,
    pub mean_radius: f64,
    pub scale: f64,
    pub profile: Vec<f64>,
}

/// Score a captured stroke sequence.
pub fn calculate_mse(points: &[SamplePoint], config: &ScoringConfig) -> Result<f64, ScoringError> {
    let planar: Vec<Point> = points.iter().map(SamplePoint::position).collect();
    score_points(&planar, config)
}

/// Score a planar point cloud.
pub fn score_points(points: &[Point], config: &ScoringConfig) -> Result<f64, ScoringError> {
    score_breakdown(points, config).map(|breakdown| breakdown.mse)
}

pub fn score_breakdown(
    points: &[Point],
    config: &ScoringConfig,
) -> Result<ScoreBreakdown, ScoringError> {
    config.validate()?;

    let shape = normalize(points, config.target_radius)?;
    let profile = resample_uniform_angles(&shape.points, config.n_angles);
    let mse = mean_squared_deviation(&profile, config.target_radius);

    if !mse.is_finite() {
        return Err(ScoringError::DegenerateShape);
    }

    Ok(ScoreBreakdown {
        mse,
        centroid: shape.centroid,
        mean_radius: shape.mean_radius,
        scale: shape.scale,
        profile,
    })
}

/// Coarse feedback band shown to the subject after a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreFeedback {
    Excellent,
    Good,
    KeepPracticing,
}

impl ScoreFeedback {
    /// Band for a score at the default 250-unit target radius.
    pub fn from_mse(mse: f64) -> Self {
        if mse < 100.0 {
            ScoreFeedback::Excellent
        } else if mse < 200.0 {
            ScoreFeedback::Good
        } else {
            ScoreFeedback::KeepPracticing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreFeedback::Excellent => "Excellent!",
            ScoreFeedback::Good => "Good!",
            ScoreFeedback::KeepPracticing => "Keep practicing!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(radius: f64, n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::from_polar(radius, i as f64 * std::f64::consts::TAU / n as f64))
            .collect()
    }

    #[test]
    fn breakdown_reports_pipeline_values() {
        let pts: Vec<Point> = circle(50.0, 120)
            .into_iter()
            .map(|p| p + Point::new(10.0, -20.0))
            .collect();
        let breakdown = score_breakdown(&pts, &ScoringConfig::default()).unwrap();

        assert_eq!(breakdown.profile.len(), 360);
        assert!((breakdown.centroid.x - 10.0).abs() < 1e-9);
        assert!((breakdown.centroid.y + 20.0).abs() < 1e-9);
        assert!((breakdown.mean_radius - 50.0).abs() < 1e-9);
        assert!((breakdown.scale - 5.0).abs() < 1e-9);
        assert!(breakdown.mse < 1e-9);
    }

    #[test]
    fn invalid_config_is_reported_before_scoring() {
        let config = ScoringConfig::new(250.0, 0);
        assert!(matches!(
            score_points(&circle(1.0, 10), &config),
            Err(ScoringError::InvalidConfig(_))
        ));
    }

    #[test]
    fn sample_points_score_like_planar_points() {
        let samples: Vec<SamplePoint> = circle(80.0, 64)
            .into_iter()
            .enumerate()
            .map(|(i, p)| SamplePoint::new(p.x, p.y, i as f64 * 0.01))
            .collect();
        let mse = calculate_mse(&samples, &ScoringConfig::default()).unwrap();
        assert!(mse < 1e-9);
    }

    #[test]
    fn feedback_bands() {
        assert_eq!(ScoreFeedback::from_mse(0.0), ScoreFeedback::Excellent);
        assert_eq!(ScoreFeedback::from_mse(99.9), ScoreFeedback::Excellent);
        assert_eq!(ScoreFeedback::from_mse(100.0), ScoreFeedback::Good);
        assert_eq!(ScoreFeedback::from_mse(250.0), ScoreFeedback::KeepPracticing);
        assert_eq!(ScoreFeedback::KeepPracticing.as_str(), "Keep practicing!");
    }
}
