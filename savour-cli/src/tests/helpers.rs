//! Test helpers for writing artefacts into a scratch directory.

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

/// Scratch directory holding artefacts for one test.
#[derive(Debug)]
pub(super) struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub(super) fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join(name)).expect("utf-8 workspace")
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        fs::write(path.as_std_path(), contents).expect("write artefact");
        path
    }

    pub(super) fn profile(&self, feature: &str, value: f64, weight: f64) -> Utf8PathBuf {
        self.write(
            "profile.json",
            &format!(
                r#"{{"preferences": [{{"feature": "{feature}", "value": {value}, "weight": {weight}}}]}}"#
            ),
        )
    }
}

/// Decode a command's JSON output.
pub(super) fn decode(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("command output should be JSON")
}
