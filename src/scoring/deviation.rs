/// Mean squared difference between each profile radius and the target.
///
/// Zero for a perfect circle of the target radius; an empty profile also
/// scores zero.
pub fn mean_squared_deviation(profile: &[f64], target_radius: f64) -> f64 {
    if profile.is_empty() {
        return 0.0;
    }

    let sum: f64 = profile
        .iter()
        .map(|r| {
            let diff = r - target_radius;
            diff * diff
        })
        .sum();

    sum / profile.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_profile_scores_zero() {
        assert_eq!(mean_squared_deviation(&[250.0; 360], 250.0), 0.0);
    }

    #[test]
    fn averages_squared_error() {
        let profile = [240.0, 260.0, 250.0, 270.0];
        // (100 + 100 + 0 + 400) / 4
        assert!((mean_squared_deviation(&profile, 250.0) - 150.0).abs() < 1e-12);
    }

    #[test]
    fn empty_profile_is_zero() {
        assert_eq!(mean_squared_deviation(&[], 250.0), 0.0);
    }
}
