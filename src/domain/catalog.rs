//! Stage catalog
//!
//! The review pipeline follows a fixed progression:
//! upload → metadata review → framework selection → standards selection →
//! context preview → analysis → results

use serde::Serialize;

use crate::schemas::SessionStatus;

/// First stage number
pub const FIRST_STAGE: u8 = 1;

/// Last (terminal) stage number
pub const LAST_STAGE: u8 = 7;

/// One step of the review pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub number: u8,
    pub label: &'static str,
    pub description: &'static str,
    pub canonical_status: SessionStatus,
}

/// The canonical ordering of review stages.
///
/// Stage numbers are contiguous from FIRST_STAGE to LAST_STAGE and the entry
/// for stage `n` lives at index `n - 1`.
pub static STAGES: [Stage; 7] = [
    Stage {
        number: 1,
        label: "Upload Documents",
        description: "Upload the financial statements and the notes to the accounts",
        canonical_status: SessionStatus::AwaitingUpload,
    },
    Stage {
        number: 2,
        label: "Metadata Review",
        description: "Review the company metadata extracted from the documents",
        canonical_status: SessionStatus::MetadataReview,
    },
    Stage {
        number: 3,
        label: "Framework Selection",
        description: "Choose the reporting framework to assess against",
        canonical_status: SessionStatus::FrameworkSelection,
    },
    Stage {
        number: 4,
        label: "Standards Selection",
        description: "Choose which standards to check",
        canonical_status: SessionStatus::StandardsSelection,
    },
    Stage {
        number: 5,
        label: "Context Preview",
        description: "Preview the document context retrieved for each question",
        canonical_status: SessionStatus::ContextPreview,
    },
    Stage {
        number: 6,
        label: "Analysis",
        description: "Run the compliance analysis",
        canonical_status: SessionStatus::Analyzing,
    },
    Stage {
        number: 7,
        label: "Results",
        description: "Review compliance results",
        canonical_status: SessionStatus::Completed,
    },
];

/// Whether `number` names a stage in the catalog
pub fn is_valid_stage(number: u8) -> bool {
    (FIRST_STAGE..=LAST_STAGE).contains(&number)
}

/// Look up a stage by number.
///
/// Returns None outside FIRST_STAGE..=LAST_STAGE; callers holding a number
/// from the controller can rely on it being present.
pub fn get_stage(number: u8) -> Option<&'static Stage> {
    if !is_valid_stage(number) {
        return None;
    }
    STAGES.get(usize::from(number - FIRST_STAGE))
}

/// Check if a stage is the terminal stage (results).
pub fn is_terminal_stage(number: u8) -> bool {
    number == LAST_STAGE
}
