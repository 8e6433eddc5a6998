//! Schema types for compliance-flow
//!
//! Session types are designed to be compatible with the compliance API's JSON
//! session objects.

mod config;
mod session;
mod session_code;

pub use config::{Config, OutputFormat};
pub use session::{SessionSnapshot, SessionStatus};
pub use session_code::SessionCode;
