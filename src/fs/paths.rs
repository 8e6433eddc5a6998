//! Path resolution utilities for compliance-flow
//!
//! Provides functions to construct paths to the config file and to stored
//! session snapshots.

use std::path::{Path, PathBuf};

use crate::schemas::{Config, SessionCode};

/// Resolve the current working directory, optionally using an override.
///
/// # Arguments
/// * `cwd_option` - Optional override for the working directory
///
/// # Returns
/// The resolved working directory path
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .compliance-flow directory.
pub fn get_flow_dir(root: &Path) -> PathBuf {
    root.join(".compliance-flow")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_flow_dir(root).join("config.json")
}

/// Get the directory holding stored session snapshots.
pub fn get_sessions_dir(root: &Path, config: &Config) -> PathBuf {
    root.join(&config.sessions_dir)
}

/// Get the path of the stored snapshot for a session code.
pub fn get_session_path(root: &Path, config: &Config, code: &str) -> PathBuf {
    get_sessions_dir(root, config).join(format!("{}.json", code))
}

/// Resolve a CLI session argument to a snapshot file.
///
/// Session codes are looked up in the sessions directory; anything else is
/// treated as a path, relative to `root` unless absolute.
pub fn resolve_session_path(root: &Path, config: &Config, session: &str) -> PathBuf {
    if SessionCode::is_session_code(session) {
        return get_session_path(root, config, session.trim());
    }
    let path = Path::new(session);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path() {
        let root = PathBuf::from("/repo");
        assert_eq!(
            get_config_path(&root),
            PathBuf::from("/repo/.compliance-flow/config.json")
        );
    }

    #[test]
    fn test_get_session_path() {
        let root = PathBuf::from("/repo");
        let config = Config {
            sessions_dir: "data/sessions".to_string(),
            ..Default::default()
        };
        assert_eq!(
            get_session_path(&root, &config, "RAI-ACME-03152025-1A2B"),
            PathBuf::from("/repo/data/sessions/RAI-ACME-03152025-1A2B.json")
        );
    }

    #[test]
    fn test_resolve_session_path_code() {
        let root = PathBuf::from("/repo");
        let resolved = resolve_session_path(&root, &Config::default(), "RAI-ACME-03152025-1A2B");
        assert_eq!(
            resolved,
            PathBuf::from("/repo/sessions/RAI-ACME-03152025-1A2B.json")
        );
    }

    #[test]
    fn test_resolve_session_path_relative_and_absolute() {
        let root = PathBuf::from("/repo");
        let config = Config::default();
        assert_eq!(
            resolve_session_path(&root, &config, "exports/acme.json"),
            PathBuf::from("/repo/exports/acme.json")
        );
        assert_eq!(
            resolve_session_path(&root, &config, "/tmp/acme.json"),
            PathBuf::from("/tmp/acme.json")
        );
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        let resolved = resolve_cwd(Some(&path));
        assert_eq!(resolved, path);
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        let resolved = resolve_cwd(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
