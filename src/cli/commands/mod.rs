//! CLI command implementations

pub mod check;
pub mod inspect;
pub mod stages;

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::domain::WorkflowController;
use crate::errors::{FlowError, Result};
use crate::fs::{read_snapshot, resolve_cwd, resolve_session_path};
use crate::schemas::{Config, OutputFormat};

/// Root directory and configuration shared by every command
pub(crate) struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
}

impl CommandContext {
    pub fn load(cwd: Option<&Path>) -> Result<Self> {
        let root = resolve_cwd(cwd);
        let config = load_config(&root)?;
        Ok(CommandContext { root, config })
    }

    /// Output format, with `--json` taking precedence over the config
    pub fn output(&self, json: bool) -> OutputFormat {
        if json {
            OutputFormat::Json
        } else {
            self.config.output
        }
    }

    /// Load the session snapshot and sync a fresh controller to it
    pub fn controller_for(&self, session: &str) -> Result<WorkflowController> {
        let path = resolve_session_path(&self.root, &self.config, session);
        tracing::debug!(path = %path.display(), "reading session snapshot");
        let snapshot = read_snapshot(&path)?;
        Ok(WorkflowController::with_snapshot(snapshot))
    }
}

pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| FlowError::wrap(e, "serializing output"))
}
