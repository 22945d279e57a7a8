use anyhow::{Context, Result};
use std::{fs, path::Path};

use circlescore::{export_session, export_session_to_temp, Session};

pub fn run(session_file: &Path, out: Option<&Path>) -> Result<()> {
    let contents = fs::read_to_string(session_file)
        .with_context(|| format!("Failed to read session from {}", session_file.display()))?;
    let session: Session = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a session file", session_file.display()))?;

    let manifest = match out {
        Some(dir) => export_session(&session, dir)?,
        None => export_session_to_temp(&session)?,
    };

    println!(
        "Exported {} of {} trials to {}",
        manifest.points_files.len(),
        session.len(),
        manifest.directory.display()
    );
    for path in manifest.paths() {
        println!("  {}", path.display());
    }

    Ok(())
}
