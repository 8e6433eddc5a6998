//! Session code schema
//!
//! Review sessions are identified by codes of the form
//! `RAI-{PREFIX}-{MMDDYYYY}-{SUFFIX}`: up to five characters of the upper-cased
//! client name with spaces removed, the creation date, and four hex digits.
//! Codes double as snapshot file names, so the prefix never holds a path
//! separator.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{FlowError, Result};

lazy_static! {
    static ref SESSION_CODE_REGEX: Regex =
        Regex::new(r"^RAI-([^/\\]{0,5})-(\d{2})(\d{2})(\d{4})-([0-9A-F]{4})$").unwrap();
}

const PREFIX_LEN: usize = 5;

/// Parsed session code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCode {
    pub client_prefix: String,
    pub date: NaiveDate,
    pub suffix: String,
}

impl SessionCode {
    /// Build the code for a new session of `client_name` created on `date`.
    ///
    /// Upper-casing can lengthen a name ("ß" becomes "SS"), so the prefix is
    /// cut to `PREFIX_LEN` characters last.
    pub fn for_client(client_name: &str, date: NaiveDate, suffix: &str) -> Result<Self> {
        let client_prefix: String = client_name
            .chars()
            .take(PREFIX_LEN)
            .filter(|c| !matches!(c, ' ' | '/' | '\\'))
            .flat_map(char::to_uppercase)
            .take(PREFIX_LEN)
            .collect();
        let suffix = suffix.to_uppercase();
        if suffix.len() != 4 || !suffix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FlowError::InvalidSessionCode(format!(
                "suffix must be four hex digits, got {:?}",
                suffix
            )));
        }
        Ok(SessionCode {
            client_prefix,
            date,
            suffix,
        })
    }

    /// Parse a session code string
    pub fn parse(code: &str) -> Result<Self> {
        let caps = SESSION_CODE_REGEX
            .captures(code.trim())
            .ok_or_else(|| FlowError::InvalidSessionCode(code.to_string()))?;

        let field = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or_default();
        let month: u32 = field(2).parse().unwrap_or(0);
        let day: u32 = field(3).parse().unwrap_or(0);
        let year: i32 = field(4).parse().unwrap_or(0);

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            FlowError::InvalidSessionCode(format!("{} has no valid calendar date", code))
        })?;

        Ok(SessionCode {
            client_prefix: field(1).to_string(),
            date,
            suffix: field(5).to_string(),
        })
    }

    /// Whether a string looks like a session code rather than a path
    pub fn is_session_code(candidate: &str) -> bool {
        SESSION_CODE_REGEX.is_match(candidate.trim())
    }
}

impl std::fmt::Display for SessionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RAI-{}-{}-{}",
            self.client_prefix,
            self.date.format("%m%d%Y"),
            self.suffix
        )
    }
}

impl std::str::FromStr for SessionCode {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self> {
        SessionCode::parse(s)
    }
}
