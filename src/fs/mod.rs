//! File system utilities for compliance-flow
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, read_snapshot};
pub use paths::{
    get_config_path, get_flow_dir, get_session_path, get_sessions_dir, resolve_cwd,
    resolve_session_path,
};
