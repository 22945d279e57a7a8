//! Export of a session's counted trials.
//!
//! Writes one raw-points file per exportable trial plus
//! `session-metadata.json`. Warm-up trials are never written.

mod metadata;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Session;
use crate::{log_info, log_warn};

pub use metadata::{reference_date_seconds, SessionMetadata, TrialExportMetadata};

const ENABLE_LOGS: bool = true;

pub const SESSION_METADATA_FILE: &str = "session-metadata.json";

/// Files written by one export, in write order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportManifest {
    pub directory: PathBuf,
    pub points_files: Vec<PathBuf>,
    pub metadata_file: PathBuf,
}

impl ExportManifest {
    /// Every written path: points files first, then the metadata file.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths = self.points_files.clone();
        paths.push(self.metadata_file.clone());
        paths
    }
}

/// Pretty-printed JSON with object keys in sorted order.
pub fn to_sorted_json<T: Serialize>(value: &T) -> Result<String> {
    // serde_json::Value keeps object keys in a BTreeMap.
    let value = serde_json::to_value(value).context("failed to serialize export value")?;
    serde_json::to_string_pretty(&value).context("failed to render export JSON")
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = to_sorted_json(value)?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

pub fn export_session(session: &Session, dir: &Path) -> Result<ExportManifest> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let mut seen = HashSet::new();
    let mut points_files = Vec::new();

    for trial in session.export_view() {
        let file_name = &trial.metadata().raw_points_file;
        if !seen.insert(file_name.clone()) {
            log_warn!(
                "Trial {} reuses points file {file_name}; earlier trial's file is overwritten",
                trial.trial_id()
            );
        }

        let path = dir.join(file_name);
        write_json(&path, &trial.stroke_points())?;
        points_files.push(path);
    }

    let metadata_file = dir.join(SESSION_METADATA_FILE);
    write_json(&metadata_file, &SessionMetadata::from_session(session))?;

    log_info!(
        "Exported {} of {} trials from session {} to {}",
        session.export_view().len(),
        session.len(),
        session.id(),
        dir.display()
    );

    Ok(ExportManifest {
        directory: dir.to_path_buf(),
        points_files,
        metadata_file,
    })
}

/// Export into a fresh `circle-session-<UUID>` directory under the system
/// temp dir.
pub fn export_session_to_temp(session: &Session) -> Result<ExportManifest> {
    let dir = std::env::temp_dir().join(format!(
        "circle-session-{}",
        Uuid::new_v4().hyphenated().to_string().to_uppercase()
    ));
    export_session(session, &dir)
}
