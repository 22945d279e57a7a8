//! CLI command definitions and handlers

mod export;
mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use circlescore::{ScoringConfig, SettingsStore};

fn parse_n_angles(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("n-angles must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

fn parse_target_radius(s: &str) -> Result<f64, String> {
    let r: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid radius", s))?;
    if r.is_finite() && r > 0.0 {
        Ok(r)
    } else {
        Err("target-radius must be finite and positive".to_string())
    }
}

#[derive(Parser, Debug)]
#[command(name = "circlescore")]
#[command(
    version,
    about = "Score hand-drawn circles and export trial sessions",
    after_help = "\
Examples:
  circlescore score circle-20240501-0930.json
  circlescore score points.json --target-radius 200 --n-angles 720
  circlescore export session.json --out ./export"
)]
pub struct Cli {
    /// Settings file holding the scoring config
    #[arg(long, global = true, env = "CIRCLESCORE_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a raw points file (JSON array of {t, x, y})
    Score {
        /// Points file to score
        file: PathBuf,

        /// Reference circle radius
        #[arg(long, value_parser = parse_target_radius)]
        target_radius: Option<f64>,

        /// Number of resampled angles
        #[arg(long, value_parser = parse_n_angles)]
        n_angles: Option<usize>,

        /// Print the resampled radius profile as well
        #[arg(long)]
        profile: bool,
    },

    /// Export the counted trials of a saved session
    Export {
        /// Session JSON file
        session: PathBuf,

        /// Output directory (default: a fresh temp directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Settings file, then environment, then flags.
fn resolve_config(
    settings: Option<&PathBuf>,
    target_radius: Option<f64>,
    n_angles: Option<usize>,
) -> Result<ScoringConfig> {
    let base = match settings {
        Some(path) => SettingsStore::new(path.clone())?.scoring(),
        None => ScoringConfig::default(),
    };

    let mut config = base.with_env_overrides();
    if let Some(radius) = target_radius {
        config.target_radius = radius;
    }
    if let Some(n) = n_angles {
        config.n_angles = n;
    }
    config.validate()?;
    Ok(config)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            file,
            target_radius,
            n_angles,
            profile,
        } => {
            let config = resolve_config(cli.settings.as_ref(), target_radius, n_angles)?;
            score::run(&file, &config, profile)
        }
        Commands::Export { session, out } => export::run(&session, out.as_deref()),
    }
}
