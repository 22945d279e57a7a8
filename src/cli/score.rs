use anyhow::{Context, Result};
use std::{fs, path::Path};

use circlescore::scoring::score_breakdown;
use circlescore::{SamplePoint, ScoreFeedback, ScoringConfig};

pub fn run(file: &Path, config: &ScoringConfig, show_profile: bool) -> Result<()> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read points from {}", file.display()))?;
    let samples: Vec<SamplePoint> = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a points file", file.display()))?;

    let points: Vec<_> = samples.iter().map(SamplePoint::position).collect();

    println!("file:          {}", file.display());
    println!("points:        {}", points.len());
    println!(
        "config:        target_radius={} n_angles={}",
        config.target_radius, config.n_angles
    );

    match score_breakdown(&points, config) {
        Ok(breakdown) => {
            println!("mse:           {:.1}", breakdown.mse);
            println!("feedback:      {}", ScoreFeedback::from_mse(breakdown.mse).as_str());
            println!(
                "centroid:      ({:.2}, {:.2})",
                breakdown.centroid.x, breakdown.centroid.y
            );
            println!("mean radius:   {:.2}", breakdown.mean_radius);
            println!("scale:         {:.4}", breakdown.scale);
            if show_profile {
                for (i, radius) in breakdown.profile.iter().enumerate() {
                    println!("{i}\t{radius:.3}");
                }
            }
        }
        Err(err) => {
            println!("mse:           N/A ({err})");
        }
    }

    Ok(())
}
