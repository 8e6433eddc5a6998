//! JSON file operations with schema validation
//!
//! Provides functions to read JSON files with serde validation.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{FlowError, Result};
use crate::schemas::{Config, SessionSnapshot};

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// The deserialized value
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FlowError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            FlowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        FlowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Read the config.json file for a root directory.
///
/// # Returns
/// The parsed Config, or default if file doesn't exist
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path).map_err(|e| match e {
        FlowError::InvalidJson(msg) => FlowError::ConfigError(msg),
        other => other,
    })
}

/// Read a session snapshot exported from the compliance API.
pub fn read_snapshot(path: &Path) -> Result<SessionSnapshot> {
    read_json(path)
}
