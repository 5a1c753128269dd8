//! `<out-stem>.provenance.json` sidecars: which build produced a result file
//! and with what parameters.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Caller-supplied part of a sidecar.
pub struct Payload {
    pub params: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params }
    }
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Sidecar document as written to disk.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub hullpath_version: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    #[track_caller]
    pub fn collect(params: Value, outputs: Vec<String>) -> Self {
        let loc = Location::caller();
        Self {
            code_rev: current_git_rev(),
            hullpath_version: hullpath::VERSION,
            callsite: Callsite {
                file: loc.file(),
                line: loc.line(),
            },
            params,
            outputs,
        }
    }
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let doc = Provenance::collect(
        payload.params,
        vec![artifact.to_string_lossy().into_owned()],
    );
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance");
    Ok(path)
}

/// `dir/output.txt` -> `dir/output.provenance.json`.
pub fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !out.status.success() {
                return None;
            }
            String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_replaces_extension() {
        assert_eq!(
            provenance_path(Path::new("data/output.txt")),
            Path::new("data/output.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("results")),
            Path::new("results.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_outputs_and_version() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("out.ndjson");
        fs::write(&artifact, "").unwrap();
        let path = write_sidecar(&artifact, Payload::new(json!({"format": "json"}))).unwrap();
        assert_eq!(path, dir.path().join("out.provenance.json"));

        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(doc["params"]["format"], "json");
        assert_eq!(doc["hullpath_version"], hullpath::VERSION);
        assert!(doc["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }
}
