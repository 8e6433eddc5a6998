//! Session schema - the review session data the workflow controller inspects
//!
//! Field names match the session objects returned by the compliance API so a
//! response body can be deserialized directly into a [`SessionSnapshot`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-reported lifecycle status of a review session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Session created, documents not yet uploaded
    #[default]
    AwaitingUpload,
    /// Documents uploaded, extraction running
    Processing,
    /// Metadata extracted and awaiting user review
    MetadataReview,
    /// User is choosing the reporting framework
    FrameworkSelection,
    /// User is choosing the standards to check
    StandardsSelection,
    /// Retrieved context is being previewed
    ContextPreview,
    /// Compliance analysis in progress
    Analyzing,
    /// Analysis finished
    Completed,
    /// Analysis failed
    Failed,
    /// Any status this build does not recognize
    #[serde(other)]
    Unknown,
}

impl SessionStatus {
    /// All statuses the backend is known to report, in pipeline order.
    pub const KNOWN: [SessionStatus; 9] = [
        SessionStatus::AwaitingUpload,
        SessionStatus::Processing,
        SessionStatus::MetadataReview,
        SessionStatus::FrameworkSelection,
        SessionStatus::StandardsSelection,
        SessionStatus::ContextPreview,
        SessionStatus::Analyzing,
        SessionStatus::Completed,
        SessionStatus::Failed,
    ];
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::AwaitingUpload => write!(f, "awaiting_upload"),
            SessionStatus::Processing => write!(f, "processing"),
            SessionStatus::MetadataReview => write!(f, "metadata_review"),
            SessionStatus::FrameworkSelection => write!(f, "framework_selection"),
            SessionStatus::StandardsSelection => write!(f, "standards_selection"),
            SessionStatus::ContextPreview => write!(f, "context_preview"),
            SessionStatus::Analyzing => write!(f, "analyzing"),
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::Failed => write!(f, "failed"),
            SessionStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awaiting_upload" => Ok(SessionStatus::AwaitingUpload),
            "processing" => Ok(SessionStatus::Processing),
            "metadata_review" => Ok(SessionStatus::MetadataReview),
            "framework_selection" => Ok(SessionStatus::FrameworkSelection),
            "standards_selection" => Ok(SessionStatus::StandardsSelection),
            "context_preview" => Ok(SessionStatus::ContextPreview),
            "analyzing" => Ok(SessionStatus::Analyzing),
            "completed" => Ok(SessionStatus::Completed),
            "failed" => Ok(SessionStatus::Failed),
            _ => Err(format!("Unknown session status: {}", s)),
        }
    }
}

/// Read-only projection of a review session.
///
/// The controller never edits a snapshot; fresher data arrives as a whole new
/// snapshot. The `with_*` builders exist for callers assembling one by hand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSnapshot {
    /// Session code, e.g. RAI-ACME-03152025-1A2B
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_code: Option<String>,

    /// Backend lifecycle status
    pub status: SessionStatus,

    /// Uploaded financial statements filename
    pub financial_statements_filename: Option<String>,

    /// Uploaded notes to the accounts filename
    pub notes_filename: Option<String>,

    /// Metadata extracted from the documents (company, period, currency...)
    pub extracted_metadata: Option<Value>,

    /// Selected framework identifier (IFRS, US GAAP, Ind AS)
    pub framework: Option<String>,

    /// Selected standard identifiers
    pub selected_standards: Option<Vec<String>>,

    /// Materialized analysis results
    pub analysis_results: Option<Value>,
}

fn is_populated(value: Option<&String>) -> bool {
    value.map(|s| !s.trim().is_empty()).unwrap_or(false)
}

impl SessionSnapshot {
    /// Create an empty snapshot with the given status
    pub fn new(status: SessionStatus) -> Self {
        SessionSnapshot {
            status,
            ..Default::default()
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_session_code(mut self, code: impl Into<String>) -> Self {
        self.session_code = Some(code.into());
        self
    }

    /// Return a new snapshot with both document slots set
    pub fn with_documents(
        mut self,
        financial_statements: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        self.financial_statements_filename = Some(financial_statements.into());
        self.notes_filename = Some(notes.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.extracted_metadata = Some(metadata);
        self
    }

    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    pub fn with_standards<I, S>(mut self, standards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_standards = Some(standards.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_results(mut self, results: Value) -> Self {
        self.analysis_results = Some(results);
        self
    }

    // ===== GUARD INPUTS =====

    /// Both required documents have been uploaded
    pub fn has_required_documents(&self) -> bool {
        is_populated(self.financial_statements_filename.as_ref())
            && is_populated(self.notes_filename.as_ref())
    }

    /// Error reported by metadata extraction, if any.
    ///
    /// Extraction signals failure through an `error` key on the metadata
    /// object; null, false and blank values do not count.
    pub fn metadata_error(&self) -> Option<String> {
        let error = self.extracted_metadata.as_ref()?.get("error")?;
        match error {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Metadata is present and extraction reported no error
    pub fn has_valid_metadata(&self) -> bool {
        let present = match self.extracted_metadata.as_ref() {
            None | Some(Value::Null) => false,
            Some(Value::Object(map)) => !map.is_empty(),
            Some(_) => true,
        };
        present && self.metadata_error().is_none()
    }

    pub fn has_framework(&self) -> bool {
        is_populated(self.framework.as_ref())
    }

    /// Number of selected standards, ignoring blank identifiers
    pub fn standards_count(&self) -> usize {
        self.selected_standards
            .iter()
            .flatten()
            .filter(|id| is_populated(Some(id)))
            .count()
    }

    pub fn has_standards(&self) -> bool {
        self.standards_count() > 0
    }

    /// The backend reports the analysis as finished
    pub fn analysis_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    pub fn has_results(&self) -> bool {
        !matches!(self.analysis_results, None | Some(Value::Null))
    }
}
