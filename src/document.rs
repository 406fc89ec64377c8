//! Loading and writing spec documents.
//!
//! The diff and merge engines are total over parsed trees; every failure
//! mode lives here, at the file boundary, so the CLI can fail fast with a
//! distinct exit code before any engine runs.

use crate::value::{self, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// DocumentError covers every way getting a tree in or out of a file can fail.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: invalid JSON: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path}: invalid YAML: {source}")]
    ParseYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize merged document: {source}")]
    Serialize { source: serde_json::Error },
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Loads a document, picking the parser by file extension. `.yaml` and
/// `.yml` parse as YAML; everything else parses as JSON.
pub fn load(path: &Path) -> Result<Value, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if is_yaml(path) {
        value::from_yaml(&content).map_err(|source| DocumentError::ParseYaml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        value::from_json(&content).map_err(|source| DocumentError::ParseJson {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Writes a document as 4-space-indented JSON with a single trailing newline.
pub fn write_json(path: &Path, value: &Value) -> Result<(), DocumentError> {
    let mut text = value::to_json_pretty(value)
        .map_err(|source| DocumentError::Serialize { source })?;
    text.push('\n');
    fs::write(path, text).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}
