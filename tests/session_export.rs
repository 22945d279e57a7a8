//! Recording a session and exporting its counted trials.

use std::f64::consts::TAU;
use std::fs;

use chrono::{DateTime, Duration, TimeZone, Utc};
use circlescore::export::{to_sorted_json, SESSION_METADATA_FILE};
use circlescore::{
    export_session, Drawing, FatigueRating, SamplePoint, Session, SessionMetadata,
    SessionStore, ScoringConfig, Stroke, WARMUP_TRIALS,
};
use serde_json::Value;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 14, 16, 0, 0).unwrap()
}

/// A circle drawn in two strokes, the second picking up where the first
/// stopped.
fn two_stroke_circle(radius: f64, wobble: f64) -> Drawing {
    let sample = |i: usize, n: usize| {
        let a = i as f64 * TAU / n as f64;
        let r = radius + wobble * (5.0 * a).cos();
        SamplePoint::new(500.0 + r * a.cos(), 400.0 + r * a.sin(), i as f64 * 0.01)
    };
    let first: Vec<_> = (0..60).map(|i| sample(i, 120)).collect();
    let second: Vec<_> = (60..120).map(|i| sample(i, 120)).collect();
    Drawing::new(vec![Stroke::new(first), Stroke::new(second)])
}

fn recorded_session(n: usize) -> SessionStore {
    let session = Session::new(start(), FatigueRating::new(8).ok());
    let store = SessionStore::new(session, ScoringConfig::default());
    for i in 0..n {
        store
            .record_trial(two_stroke_circle(150.0, i as f64), start() + Duration::minutes(i as i64))
            .unwrap();
    }
    store
}

#[test]
fn export_writes_only_counted_trials() {
    let store = recorded_session(8);
    let session = store.snapshot();
    let dir = tempfile::tempdir().unwrap();

    let manifest = export_session(&session, dir.path()).unwrap();

    assert_eq!(manifest.points_files.len(), 8 - WARMUP_TRIALS);
    assert_eq!(manifest.paths().len(), 8 - WARMUP_TRIALS + 1);
    assert_eq!(manifest.metadata_file, dir.path().join(SESSION_METADATA_FILE));

    let expected_files: Vec<_> = session
        .export_view()
        .iter()
        .map(|t| dir.path().join(&t.metadata().raw_points_file))
        .collect();
    assert_eq!(manifest.points_files, expected_files);
    for trial in session.warmup_trials() {
        assert!(!dir.path().join(&trial.metadata().raw_points_file).exists());
    }
}

#[test]
fn points_file_holds_flattened_strokes() {
    let store = recorded_session(6);
    let session = store.snapshot();
    let dir = tempfile::tempdir().unwrap();

    let manifest = export_session(&session, dir.path()).unwrap();

    let raw = fs::read_to_string(&manifest.points_files[0]).unwrap();
    let points: Vec<SamplePoint> = serde_json::from_str(&raw).unwrap();
    assert_eq!(points, session.export_view()[0].stroke_points());
    assert_eq!(points.len(), 120);

    let value: Value = serde_json::from_str(&raw).unwrap();
    let keys: Vec<_> = value[0].as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["t", "x", "y"]);
}

#[test]
fn session_metadata_matches_exchange_format() {
    let store = recorded_session(7);
    let session = store.snapshot();
    let dir = tempfile::tempdir().unwrap();

    export_session(&session, dir.path()).unwrap();

    let raw = fs::read_to_string(dir.path().join(SESSION_METADATA_FILE)).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();

    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["created", "fatigue_rating", "session_id", "trials"]);
    assert_eq!(
        value["session_id"],
        Value::String(session.id().to_string().to_uppercase())
    );
    assert_eq!(value["fatigue_rating"], Value::from(8));
    // Seconds since 2001-01-01T00:00:00Z.
    assert_eq!(value["created"].as_f64(), Some(748_022_400.0));

    let trials = value["trials"].as_array().unwrap();
    assert_eq!(trials.len(), 2);
    assert_eq!(trials[0]["trial_id"], Value::from("2024-09-14T16:05:00Z"));
    assert_eq!(trials[0]["raw_points_file"], Value::from("circle-20240914-1605.json"));
    assert_eq!(trials[0]["fatigue_rating"], Value::from(8));
    assert!(trials[0]["mse"].as_f64().unwrap() > 0.0);

    let parsed: SessionMetadata = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, SessionMetadata::from_session(&session));
}

#[test]
fn unscored_trials_export_without_mse() {
    let session = Session::new(start(), None);
    let store = SessionStore::new(session, ScoringConfig::default());
    for i in 0..6 {
        let drawing = Drawing::single_stroke(vec![SamplePoint::new(1.0, 2.0, 0.0)]);
        let trial = store
            .record_trial(drawing, start() + Duration::minutes(i))
            .unwrap();
        assert_eq!(trial.mse(), None);
    }

    let metadata = SessionMetadata::from_session(&store.snapshot());
    let json = to_sorted_json(&metadata).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("fatigue_rating").is_none());
    let trial = value["trials"][0].as_object().unwrap();
    let keys: Vec<_> = trial.keys().cloned().collect();
    assert_eq!(keys, vec!["raw_points_file", "trial_id"]);
}

#[test]
fn deleting_an_early_trial_shrinks_the_export() {
    let store = recorded_session(7);
    let before: Vec<_> = store.export_view().iter().map(|t| t.id()).collect();
    assert_eq!(before.len(), 2);

    let first = store.trials()[0].id();
    store.remove(first).unwrap();

    let after: Vec<_> = store.export_view().iter().map(|t| t.id()).collect();
    assert_eq!(after, vec![before[1]]);
}

#[test]
fn renamed_trial_exports_new_label() {
    let store = recorded_session(6);
    let counted = store.export_view()[0].clone();
    store.rename(counted.id(), "baseline").unwrap();

    let metadata = SessionMetadata::from_session(&store.snapshot());
    assert_eq!(metadata.trials[0].trial_id, "baseline");
    assert_eq!(metadata.trials[0].mse, counted.mse());
    assert_eq!(metadata.trials[0].raw_points_file, counted.metadata().raw_points_file);
}

#[test]
fn session_round_trips_through_json() {
    let session = recorded_session(6).snapshot();
    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}
