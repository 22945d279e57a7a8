use crate::geometry::{centroid, Point};
use crate::scoring::ScoringError;

/// Fewest points for which a circle's shape is defined.
pub const MIN_POINTS: usize = 3;

/// A point cloud centered on its centroid and rescaled so its mean radius
/// equals the target radius.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedShape {
    pub points: Vec<Point>,
    /// Centroid of the raw input, removed from every point.
    pub centroid: Point,
    /// Mean distance of the centered input from the origin, before scaling.
    pub mean_radius: f64,
    /// Factor applied to the centered input: `target_radius / mean_radius`.
    pub scale: f64,
}

/// Remove translation and uniform scale from a raw point cloud.
///
/// The centroid stands in for the circle center; hand-drawn circles are
/// roughly symmetric around their own centroid.
pub fn normalize(points: &[Point], target_radius: f64) -> Result<NormalizedShape, ScoringError> {
    if points.len() < MIN_POINTS {
        return Err(ScoringError::InsufficientData {
            found: points.len(),
        });
    }
    if points.iter().any(|p| !p.is_finite()) {
        return Err(ScoringError::NonFiniteInput);
    }

    // Coincident points are compared exactly; rounding in the centroid would
    // otherwise leave them a tiny nonzero mean radius.
    let first = points[0];
    if points.iter().all(|&p| p == first) {
        return Err(ScoringError::DegenerateShape);
    }

    let center = centroid(points).ok_or(ScoringError::InsufficientData { found: 0 })?;
    let centered: Vec<Point> = points.iter().map(|&p| p - center).collect();

    let mean_radius = centered.iter().map(|p| p.norm()).sum::<f64>() / centered.len() as f64;

    let scale = target_radius / mean_radius;
    if mean_radius == 0.0 || !scale.is_finite() {
        return Err(ScoringError::DegenerateShape);
    }

    Ok(NormalizedShape {
        points: centered.into_iter().map(|p| p * scale).collect(),
        centroid: center,
        mean_radius,
        scale,
    })
}
