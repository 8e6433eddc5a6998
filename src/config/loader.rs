//! Configuration loading with defaults

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the root directory, falling back to defaults.
///
/// If .compliance-flow/config.json exists, it will be read and merged with
/// defaults. If it doesn't exist, default configuration is returned.
///
/// # Arguments
/// * `root` - Path to the root directory
///
/// # Returns
/// The resolved configuration
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    tracing::debug!(
        sessions_dir = %config.sessions_dir,
        output = ?config.output,
        "loaded configuration"
    );
    Ok(config)
}
