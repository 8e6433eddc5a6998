//! Property-based tests for domain logic
//!
//! These tests use proptest to verify navigation invariants across many
//! random sessions.

#[cfg(test)]
mod tests {
    use crate::domain::catalog::{FIRST_STAGE, LAST_STAGE};
    use crate::domain::controller::WorkflowController;
    use crate::domain::guards::TRANSITION_GUARDS;
    use crate::domain::mapper::status_to_stage;
    use crate::domain::reachability::compute_max_reachable;
    use crate::schemas::{SessionSnapshot, SessionStatus};
    use proptest::prelude::*;
    use serde_json::json;

    // ===== STRATEGY HELPERS =====

    /// Generate a random SessionStatus, including unrecognized ones
    fn any_session_status() -> impl Strategy<Value = SessionStatus> {
        prop_oneof![
            Just(SessionStatus::AwaitingUpload),
            Just(SessionStatus::Processing),
            Just(SessionStatus::MetadataReview),
            Just(SessionStatus::FrameworkSelection),
            Just(SessionStatus::StandardsSelection),
            Just(SessionStatus::ContextPreview),
            Just(SessionStatus::Analyzing),
            Just(SessionStatus::Completed),
            Just(SessionStatus::Failed),
            Just(SessionStatus::Unknown),
        ]
    }

    fn any_filename() -> impl Strategy<Value = Option<String>> {
        prop_oneof![Just(None), Just(Some(String::new())), Just(Some("doc.pdf".to_string()))]
    }

    fn any_metadata() -> impl Strategy<Value = Option<serde_json::Value>> {
        prop_oneof![
            Just(None),
            Just(Some(json!({}))),
            Just(Some(json!({"error": "extraction failed"}))),
            Just(Some(json!({"company_name": "Acme", "currency": "USD"}))),
        ]
    }

    /// Generate a random, possibly partially populated snapshot
    fn any_snapshot() -> impl Strategy<Value = SessionSnapshot> {
        (
            any_session_status(),
            any_filename(),
            any_filename(),
            any_metadata(),
            prop::option::of(prop_oneof![Just(String::new()), Just("IFRS".to_string())]),
            prop::option::of(prop::collection::vec("[A-Z]{3} [0-9]{1,2}", 0..3)),
            prop::option::of(prop_oneof![Just(serde_json::Value::Null), Just(json!({"items": []}))]),
        )
            .prop_map(|(status, fs, notes, metadata, framework, standards, results)| {
                SessionSnapshot {
                    session_code: None,
                    status,
                    financial_statements_filename: fs,
                    notes_filename: notes,
                    extracted_metadata: metadata,
                    framework,
                    selected_standards: standards,
                    analysis_results: results,
                }
            })
    }

    fn any_stage() -> impl Strategy<Value = u8> {
        FIRST_STAGE..=LAST_STAGE
    }

    // ===== REACHABILITY =====

    proptest! {
        /// Property: reachability equals one plus the length of the passing
        /// guard prefix
        #[test]
        fn test_max_reachable_is_passing_prefix(snapshot in any_snapshot()) {
            let prefix = TRANSITION_GUARDS
                .iter()
                .take_while(|g| g.passes(&snapshot))
                .count() as u8;
            prop_assert_eq!(compute_max_reachable(Some(&snapshot)), FIRST_STAGE + prefix);
        }

        /// Property: reachability never leaves the catalog range
        #[test]
        fn test_max_reachable_in_range(snapshot in any_snapshot()) {
            let max = compute_max_reachable(Some(&snapshot));
            prop_assert!((FIRST_STAGE..=LAST_STAGE).contains(&max));
        }

        /// Property: satisfying one more guard never lowers reachability
        #[test]
        fn test_adding_documents_is_monotonic(snapshot in any_snapshot()) {
            let before = compute_max_reachable(Some(&snapshot));
            let after = compute_max_reachable(Some(&snapshot.with_documents("fs.pdf", "notes.pdf")));
            prop_assert!(after >= before);
        }

        /// Property: a failed session never reaches results by guard
        #[test]
        fn test_failed_status_caps_reachability(snapshot in any_snapshot()) {
            let failed = snapshot.with_status(SessionStatus::Failed);
            prop_assert_eq!(status_to_stage(failed.status), LAST_STAGE);
            prop_assert!(compute_max_reachable(Some(&failed)) < LAST_STAGE);
        }
    }

    // ===== NAVIGATION =====

    proptest! {
        /// Property: any stage at or below the current one is reachable
        #[test]
        fn test_backward_is_unconditional(snapshot in any_snapshot(), target in any_stage()) {
            let mut controller = WorkflowController::with_snapshot(snapshot);
            let current = controller.current_stage();
            if target <= current {
                prop_assert!(controller.can_go_to(target));
                prop_assert!(controller.go_to(target).is_ok());
                prop_assert_eq!(controller.current_stage(), target);
            }
        }

        /// Property: forward permission matches cached reachability
        #[test]
        fn test_forward_permission_matches_reachability(
            snapshot in any_snapshot(),
            target in any_stage()
        ) {
            let controller = WorkflowController::with_snapshot(snapshot);
            if target > controller.current_stage() {
                prop_assert_eq!(
                    controller.can_go_to(target),
                    target <= controller.max_reachable_stage()
                );
            }
        }

        /// Property: go_to agrees with can_go_to for a freshly synced snapshot
        #[test]
        fn test_go_to_agrees_with_can_go_to(snapshot in any_snapshot(), target in any_stage()) {
            let mut controller = WorkflowController::with_snapshot(snapshot);
            let allowed = controller.can_go_to(target);
            prop_assert_eq!(controller.go_to(target).is_ok(), allowed);
        }

        /// Property: a rejected go_to leaves the controller unchanged
        #[test]
        fn test_rejected_go_to_is_a_no_op(snapshot in any_snapshot(), target in 0u8..=10) {
            let mut controller = WorkflowController::with_snapshot(snapshot);
            let before = controller.clone();
            if controller.go_to(target).is_err() {
                prop_assert_eq!(controller.current_stage(), before.current_stage());
                prop_assert_eq!(controller.max_reachable_stage(), before.max_reachable_stage());
                prop_assert_eq!(controller.snapshot(), before.snapshot());
            }
        }

        /// Property: without a session only the first stage is reachable
        #[test]
        fn test_no_session_only_first_stage(target in 0u8..=10) {
            let controller = WorkflowController::new();
            prop_assert_eq!(controller.can_go_to(target), target == FIRST_STAGE);
        }
    }

    // ===== SYNC =====

    proptest! {
        /// Property: syncing the same snapshot twice is idempotent
        #[test]
        fn test_sync_is_idempotent(snapshot in any_snapshot(), detour in any_stage()) {
            let mut controller = WorkflowController::new();
            controller.sync(snapshot.clone());
            let first = (controller.current_stage(), controller.max_reachable_stage());

            let _ = controller.go_to(detour);
            controller.sync(snapshot);
            prop_assert_eq!(first, (controller.current_stage(), controller.max_reachable_stage()));
        }

        /// Property: sync always lands on the status-mapped stage
        #[test]
        fn test_sync_follows_status(snapshot in any_snapshot(), detour in any_stage()) {
            let mut controller = WorkflowController::with_snapshot(snapshot.clone());
            let _ = controller.go_to(detour);
            let expected = status_to_stage(snapshot.status);
            controller.sync(snapshot);
            prop_assert_eq!(controller.current_stage(), expected);
        }
    }
}
