//! CLI module for compliance-flow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// compliance-flow - Inspect where a compliance review session stands and
/// where it may go next
#[derive(Parser, Debug)]
#[command(name = "compliance-flow")]
#[command(version)]
#[command(about = "Inspect stage progression of compliance review sessions")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the review stages
    Stages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the current stage, reachability and blocking guards of a session
    Inspect {
        /// Session code (looked up in the sessions directory) or snapshot path
        session: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a session may move to a stage
    Check {
        /// Session code (looked up in the sessions directory) or snapshot path
        session: String,

        /// Target stage number (1-7)
        stage: u8,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
