//! Config schema - Configuration for compliance-flow

use serde::{Deserialize, Serialize};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Main configuration for compliance-flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Directory (relative to the root) holding stored session snapshots
    #[serde(default = "default_sessions_dir")]
    pub sessions_dir: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_sessions_dir() -> String {
    "sessions".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            output: OutputFormat::Text,
            sessions_dir: default_sessions_dir(),
        }
    }
}
