use std::f64::consts::TAU;

use crate::geometry::{normalize_angle, Point};

/// Reference angles `i * 2π / n_angles`, counter-clockwise from +x.
pub fn reference_angles(n_angles: usize) -> Vec<f64> {
    (0..n_angles)
        .map(|i| i as f64 * TAU / n_angles as f64)
        .collect()
}

/// Nearest-angle resampling of a centered point cloud onto a uniform grid.
///
/// For each reference angle the radius of the point with the smallest
/// wrapped angular distance is taken; ties keep the earliest point. The
/// direct O(n_angles × n_points) scan is enough for strokes of a few
/// thousand samples.
///
/// Returns `n_angles` radii, or an empty profile for empty input.
pub fn resample_uniform_angles(points: &[Point], n_angles: usize) -> Vec<f64> {
    if points.is_empty() {
        return Vec::new();
    }

    let polar: Vec<(f64, f64)> = points.iter().map(|p| (p.angle(), p.norm())).collect();

    reference_angles(n_angles)
        .into_iter()
        .map(|angle| {
            let mut best_distance = f64::INFINITY;
            let mut best_radius = polar[0].1;
            for &(theta, radius) in &polar {
                let distance = normalize_angle(theta - angle).abs();
                if distance < best_distance {
                    best_distance = distance;
                    best_radius = radius;
                }
            }
            best_radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn reference_grid_is_uniform() {
        let angles = reference_angles(4);
        assert_eq!(angles.len(), 4);
        assert!((angles[1] - PI / 2.0).abs() < 1e-12);
        assert!((angles[3] - 3.0 * PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn profile_has_requested_length() {
        let pts = [
            Point::new(1.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(-3.0, 0.0),
        ];
        assert_eq!(resample_uniform_angles(&pts, 360).len(), 360);
        assert_eq!(resample_uniform_angles(&pts, 1).len(), 1);
        assert!(resample_uniform_angles(&[], 360).is_empty());
    }

    #[test]
    fn picks_radius_of_nearest_angle() {
        let pts = [
            Point::new(1.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(-3.0, 0.0),
            Point::new(0.0, -4.0),
        ];
        let profile = resample_uniform_angles(&pts, 4);
        let expected = [1.0, 2.0, 3.0, 4.0];
        for (got, want) in profile.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn wraparound_near_pi_is_handled() {
        // Reference angle π (i = 2 of 4) sits between atan2 values just
        // below π and just above −π; both are close, the second is closer.
        let pts = [
            Point::from_polar(5.0, PI - 0.2),
            Point::from_polar(7.0, -PI + 0.1),
            Point::from_polar(1.0, 0.0),
        ];
        let profile = resample_uniform_angles(&pts, 4);
        assert!((profile[2] - 7.0).abs() < 1e-12);
        // Reference angle 3π/2 maps to −π/2; the −π + 0.1 point is nearest.
        assert!((profile[3] - 7.0).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_first_point() {
        // Both points sit π/4 either side of the reference angle 0.
        let pts = [Point::new(2.0, 2.0), Point::new(9.0, -9.0)];
        let profile = resample_uniform_angles(&pts, 1);
        assert!((profile[0] - 8.0_f64.sqrt()).abs() < 1e-12);
    }
}
