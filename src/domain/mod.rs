//! Domain logic for review stages and navigation

mod catalog;
mod controller;
mod guards;
mod mapper;
mod reachability;

// Property-based tests (compiled only in test builds)
#[cfg(test)]
mod property_tests;

pub use catalog::{get_stage, is_terminal_stage, is_valid_stage, Stage, FIRST_STAGE, LAST_STAGE, STAGES};
pub use controller::{NavigationResult, StepState, StepView, WorkflowController, WorkflowSummary};
pub use guards::{
    all_guards_up_to, can_enter_analysis, can_enter_context_preview,
    can_enter_framework_selection, can_enter_metadata_review, can_enter_results,
    can_enter_standards_selection, evaluate, first_violation, TransitionGuard,
    TRANSITION_GUARDS,
};
pub use mapper::status_to_stage;
pub use reachability::compute_max_reachable;
