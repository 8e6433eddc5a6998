//! Error types for compliance-flow
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for compliance-flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// Rejection of a navigation request by the workflow controller.
///
/// These are expected, user-facing outcomes: the controller state is left
/// unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Target stage is outside the catalog range
    #[error("invalid stage: {0}")]
    InvalidStage(u8),

    /// Forward move requested before any session was loaded
    #[error("no session available")]
    NoSession,

    /// A transition guard rejected the forward move
    #[error("{message}")]
    GuardViolation {
        from_stage: u8,
        to_stage: u8,
        message: String,
    },
}

impl NavigationError {
    /// Get the error code for this rejection
    pub fn code(&self) -> &'static str {
        match self {
            NavigationError::InvalidStage(_) => "INVALID_STAGE",
            NavigationError::NoSession => "NO_SESSION",
            NavigationError::GuardViolation { .. } => "GUARD_VIOLATION",
        }
    }
}

/// Main error type for all compliance-flow operations
#[derive(Debug, Error)]
pub enum FlowError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Session code does not follow RAI-{PREFIX}-{MMDDYYYY}-{SUFFIX}
    #[error("Invalid session code: {0}")]
    InvalidSessionCode(String),

    /// Navigation request rejected by the controller
    #[error("Navigation rejected: {0}")]
    Navigation(#[from] NavigationError),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl FlowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            FlowError::FileNotFound(_) => "FILE_NOT_FOUND",
            FlowError::InvalidJson(_) => "INVALID_JSON",
            FlowError::ConfigError(_) => "CONFIG_ERROR",
            FlowError::InvalidSessionCode(_) => "INVALID_SESSION_CODE",
            FlowError::Navigation(inner) => inner.code(),
            FlowError::Io(_) => "IO_ERROR",
            FlowError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        FlowError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &FlowError) -> i32 {
    match error {
        FlowError::Navigation(_) => 2,
        _ => 1,
    }
}
