//! compliance-flow - Stage-progression controller for compliance review sessions
//!
//! A review session moves through seven stages: upload, metadata review,
//! framework selection, standards selection, context preview, analysis and
//! results. This library provides:
//! - Schema definitions for session snapshots, statuses, session codes and config
//! - Domain logic for the stage catalog, transition guards, reachability and
//!   the workflow controller
//! - File system utilities for reading exported session snapshots
//! - A small CLI for inspecting sessions

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use domain::{Stage, WorkflowController};
pub use errors::{FlowError, NavigationError, Result};
pub use schemas::{Config, SessionSnapshot, SessionStatus};
