//! Status to stage mapping

use crate::schemas::SessionStatus;

use super::catalog::{FIRST_STAGE, LAST_STAGE};

/// Map a server-reported session status to the stage it belongs to.
///
/// Both `completed` and `failed` land on the results stage: a failed analysis
/// still has a results view explaining the failure. An unrecognized status
/// restarts at the upload stage instead of erroring.
pub fn status_to_stage(status: SessionStatus) -> u8 {
    match status {
        SessionStatus::AwaitingUpload => FIRST_STAGE,
        SessionStatus::Processing | SessionStatus::MetadataReview => 2,
        SessionStatus::FrameworkSelection => 3,
        SessionStatus::StandardsSelection => 4,
        SessionStatus::ContextPreview => 5,
        SessionStatus::Analyzing => 6,
        SessionStatus::Completed | SessionStatus::Failed => LAST_STAGE,
        SessionStatus::Unknown => {
            tracing::warn!("unrecognized session status, falling back to stage {}", FIRST_STAGE);
            FIRST_STAGE
        }
    }
}
