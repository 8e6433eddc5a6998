//! Workflow controller
//!
//! Holds the current stage and the last synced snapshot of one review
//! session, and answers navigation requests against them.
//!
//! Two numbers describe where a session is, and they are allowed to disagree:
//!
//! - `current_stage` is assigned from the backend status on every
//!   [`WorkflowController::sync`]. The backend is authoritative, so a `failed`
//!   session sits on the results stage even though its data never satisfied
//!   the results guard.
//! - `max_reachable_stage` is derived from the local guard table and only
//!   decides how far the user may move forward.
//!
//! Do not collapse them into one value. The backend can place a session where
//! the local guards cannot reconstruct it (a failed analysis, a manually
//! corrected status), and the user must still be able to land there.
//!
//! The controller is not synchronized. Hosts sharing one across tasks must
//! serialize `sync` and `go_to` themselves.

use serde::Serialize;

use crate::errors::NavigationError;
use crate::schemas::{SessionSnapshot, SessionStatus};

use super::catalog::{get_stage, is_valid_stage, Stage, FIRST_STAGE, LAST_STAGE, STAGES};
use super::guards::{all_guards_up_to, first_violation, TransitionGuard};
use super::mapper::status_to_stage;
use super::reachability::compute_max_reachable;

/// Outcome of a navigation request
pub type NavigationResult = std::result::Result<(), NavigationError>;

/// Position of a stage relative to the session, for progress indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Current,
    Available,
    Locked,
}

/// One entry of the stepper view
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    #[serde(flatten)]
    pub stage: Stage,
    pub state: StepState,
}

/// Serializable snapshot of the controller's decisions
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowSummary {
    pub session_code: Option<String>,
    pub status: Option<SessionStatus>,
    pub current_stage: u8,
    pub current_label: &'static str,
    pub current_description: &'static str,
    pub max_reachable_stage: u8,
    pub blocking: Vec<String>,
    pub steps: Vec<StepView>,
}

/// Stage-progression controller for a single review session
#[derive(Debug, Clone)]
pub struct WorkflowController {
    current_stage: u8,
    max_reachable: u8,
    snapshot: Option<SessionSnapshot>,
}

impl Default for WorkflowController {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowController {
    /// Create a controller with no session loaded, on the first stage
    pub fn new() -> Self {
        WorkflowController {
            current_stage: FIRST_STAGE,
            max_reachable: FIRST_STAGE,
            snapshot: None,
        }
    }

    /// Create a controller already synced to `snapshot`
    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        let mut controller = Self::new();
        controller.sync(snapshot);
        controller
    }

    pub fn current_stage(&self) -> u8 {
        self.current_stage
    }

    /// Catalog entry for the current stage
    pub fn current_stage_info(&self) -> &'static Stage {
        // current_stage only ever holds catalog numbers
        get_stage(self.current_stage).unwrap_or(&STAGES[0])
    }

    pub fn current_stage_label(&self) -> &'static str {
        self.current_stage_info().label
    }

    pub fn current_stage_description(&self) -> &'static str {
        self.current_stage_info().description
    }

    /// Highest stage the loaded snapshot's data permits
    pub fn max_reachable_stage(&self) -> u8 {
        self.max_reachable
    }

    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn has_session(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Replace the snapshot and move to the stage its status maps to.
    ///
    /// The move is unconditional and may go backward relative to where the
    /// user navigated.
    pub fn sync(&mut self, snapshot: SessionSnapshot) {
        let stage = status_to_stage(snapshot.status);
        self.max_reachable = compute_max_reachable(Some(&snapshot));
        tracing::debug!(
            status = %snapshot.status,
            from = self.current_stage,
            to = stage,
            max_reachable = self.max_reachable,
            "synced session snapshot"
        );
        self.current_stage = stage;
        self.snapshot = Some(snapshot);
    }

    /// Whether a move to `stage` would be allowed, using the cached
    /// reachability.
    pub fn can_go_to(&self, stage: u8) -> bool {
        if !is_valid_stage(stage) {
            return false;
        }
        stage <= self.current_stage || (self.has_session() && stage <= self.max_reachable)
    }

    /// Move to `stage`.
    ///
    /// Backward moves always succeed. Forward moves re-check the guard chain
    /// against the current snapshot rather than the cached reachability. On
    /// rejection nothing changes.
    pub fn go_to(&mut self, stage: u8) -> NavigationResult {
        if !is_valid_stage(stage) {
            return Err(NavigationError::InvalidStage(stage));
        }

        if stage <= self.current_stage {
            tracing::debug!(from = self.current_stage, to = stage, "moved back");
            self.current_stage = stage;
            return Ok(());
        }

        let snapshot = self.snapshot.as_ref().ok_or(NavigationError::NoSession)?;

        if let Some(guard) = first_violation(stage, snapshot) {
            tracing::info!(
                from = self.current_stage,
                to = stage,
                blocked_at = guard.from_stage,
                "forward move rejected: {}",
                guard.violation_message
            );
            return Err(guard.violation());
        }

        tracing::debug!(from = self.current_stage, to = stage, "moved forward");
        self.current_stage = stage;
        Ok(())
    }

    /// Move one stage forward
    pub fn advance(&mut self) -> NavigationResult {
        self.go_to(self.current_stage.saturating_add(1))
    }

    /// Move one stage back; rejected only on the first stage
    pub fn go_back(&mut self) -> NavigationResult {
        self.go_to(self.current_stage.saturating_sub(1))
    }

    /// Guards blocking `target` in the loaded snapshot, in table order
    pub fn failing_guards(&self, target: u8) -> Vec<&'static TransitionGuard> {
        match self.snapshot.as_ref() {
            Some(snapshot) => all_guards_up_to(target, snapshot),
            None => Vec::new(),
        }
    }

    /// One entry per catalog stage describing its position
    pub fn stepper(&self) -> Vec<StepView> {
        STAGES
            .iter()
            .map(|stage| {
                let state = if stage.number < self.current_stage {
                    StepState::Completed
                } else if stage.number == self.current_stage {
                    StepState::Current
                } else if self.can_go_to(stage.number) {
                    StepState::Available
                } else {
                    StepState::Locked
                };
                StepView {
                    stage: *stage,
                    state,
                }
            })
            .collect()
    }

    pub fn summary(&self) -> WorkflowSummary {
        let info = self.current_stage_info();
        WorkflowSummary {
            session_code: self.snapshot.as_ref().and_then(|s| s.session_code.clone()),
            status: self.snapshot.as_ref().map(|s| s.status),
            current_stage: self.current_stage,
            current_label: info.label,
            current_description: info.description,
            max_reachable_stage: self.max_reachable,
            blocking: self
                .failing_guards(LAST_STAGE)
                .iter()
                .map(|g| g.violation_message.to_string())
                .collect(),
            steps: self.stepper(),
        }
    }
}
