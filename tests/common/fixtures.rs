//! Event and settings files in a temporary directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::json;

pub const LABEL: &str = "generator:unsmeared";

/// One JSON event whose `generator:unsmeared` collection holds `particles`.
pub fn event(id: u64, particles: &[(i32, i32)]) -> serde_json::Value {
    let particles: Vec<_> = particles
        .iter()
        .map(|&(pdg_id, status)| json!({ "pdg_id": pdg_id, "status": status }))
        .collect();
    json!({ "event": id, "collections": { LABEL: particles } })
}

/// One JSON event without any particle collection.
pub fn bare_event(id: u64) -> serde_json::Value {
    json!({ "event": id, "collections": {} })
}

/// The reference electron/positron pair events.
pub fn pair_events() -> Vec<serde_json::Value> {
    vec![
        event(1, &[(11, 1), (-11, 1)]),
        event(2, &[(11, 1)]),
        event(3, &[(11, 1), (11, 2), (-11, 1)]),
        event(4, &[]),
    ]
}

#[allow(dead_code)]
pub struct EventWorkspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl EventWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write events as JSON Lines.
    pub fn write_jsonl(&self, name: &str, events: &[serde_json::Value]) -> PathBuf {
        let body: String = events.iter().map(|e| format!("{e}\n")).collect();
        self.write(name, &body)
    }

    /// Write events as one JSON array.
    pub fn write_json(&self, name: &str, events: &[serde_json::Value]) -> PathBuf {
        self.write(name, &serde_json::to_string_pretty(events).unwrap())
    }

    /// Settings file for the reference pair selection.
    pub fn pair_settings(&self) -> PathBuf {
        self.write(
            "pair.json",
            r#"{"particleIDs": [11, -11], "multipleOf": 2, "absID": false, "min": 2, "status": 1}"#,
        )
    }
}
