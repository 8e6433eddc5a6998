//! Transition guards for forward stage moves
//!
//! One guard per adjacent stage pair, evaluated in ascending `from_stage`
//! order. Later guards assume the session already satisfies the earlier ones,
//! so the table as a whole is what makes forward progress correct.

use crate::errors::NavigationError;
use crate::schemas::SessionSnapshot;

use super::catalog::is_valid_stage;

/// Precondition gating the move from `from_stage` to `to_stage`
#[derive(Debug, Clone, Copy)]
pub struct TransitionGuard {
    pub from_stage: u8,
    pub to_stage: u8,
    pub predicate: fn(&SessionSnapshot) -> bool,
    pub violation_message: &'static str,
}

impl TransitionGuard {
    /// Whether the snapshot satisfies this guard
    pub fn passes(&self, snapshot: &SessionSnapshot) -> bool {
        (self.predicate)(snapshot)
    }

    /// The rejection reported when this guard blocks a move
    pub fn violation(&self) -> NavigationError {
        NavigationError::GuardViolation {
            from_stage: self.from_stage,
            to_stage: self.to_stage,
            message: self.violation_message.to_string(),
        }
    }
}

/// 1 → 2: cannot review metadata with no source documents
pub fn can_enter_metadata_review(snapshot: &SessionSnapshot) -> bool {
    snapshot.has_required_documents()
}

/// 2 → 3: framework choice may depend on the extracted metadata
pub fn can_enter_framework_selection(snapshot: &SessionSnapshot) -> bool {
    snapshot.has_valid_metadata()
}

/// 3 → 4: standards are framework-specific
pub fn can_enter_standards_selection(snapshot: &SessionSnapshot) -> bool {
    snapshot.has_framework()
}

/// 4 → 5: context preview needs a non-empty question set
pub fn can_enter_context_preview(snapshot: &SessionSnapshot) -> bool {
    snapshot.has_standards()
}

/// 5 → 6: standards re-checked in case the selection drifted after stage 4.
///
/// Deliberately the same predicate as 4 → 5. Context preview may be meant to
/// demand more (e.g. chunk coverage), which is an open product question.
pub fn can_enter_analysis(snapshot: &SessionSnapshot) -> bool {
    snapshot.has_standards()
}

/// 6 → 7: results need a finished, materialized analysis
pub fn can_enter_results(snapshot: &SessionSnapshot) -> bool {
    snapshot.analysis_completed() && snapshot.has_results()
}

/// Guard table, ordered by `from_stage`.
pub static TRANSITION_GUARDS: [TransitionGuard; 6] = [
    TransitionGuard {
        from_stage: 1,
        to_stage: 2,
        predicate: can_enter_metadata_review,
        violation_message: "Both the financial statements and the notes must be uploaded",
    },
    TransitionGuard {
        from_stage: 2,
        to_stage: 3,
        predicate: can_enter_framework_selection,
        violation_message: "Metadata must be extracted without errors before choosing a framework",
    },
    TransitionGuard {
        from_stage: 3,
        to_stage: 4,
        predicate: can_enter_standards_selection,
        violation_message: "A compliance framework must be selected",
    },
    TransitionGuard {
        from_stage: 4,
        to_stage: 5,
        predicate: can_enter_context_preview,
        violation_message: "At least one standard must be selected",
    },
    TransitionGuard {
        from_stage: 5,
        to_stage: 6,
        predicate: can_enter_analysis,
        violation_message: "At least one standard must remain selected before running the analysis",
    },
    TransitionGuard {
        from_stage: 6,
        to_stage: 7,
        predicate: can_enter_results,
        violation_message: "The analysis must complete with results before they can be reviewed",
    },
];

/// Evaluate a move from `from_stage` to `to_stage`.
///
/// Backward moves and staying put always pass. A forward move passes when
/// every guard on the path between the two stages passes. Stage numbers
/// outside the catalog never pass.
pub fn evaluate(from_stage: u8, to_stage: u8, snapshot: &SessionSnapshot) -> bool {
    if !is_valid_stage(from_stage) || !is_valid_stage(to_stage) {
        return false;
    }
    if to_stage <= from_stage {
        return true;
    }
    TRANSITION_GUARDS
        .iter()
        .filter(|g| g.from_stage >= from_stage && g.to_stage <= to_stage)
        .all(|g| g.passes(snapshot))
}

/// Every guard with `to_stage <= target_stage` that the snapshot fails, in
/// table order. Unlike reachability this does not stop at the first failure.
pub fn all_guards_up_to(
    target_stage: u8,
    snapshot: &SessionSnapshot,
) -> Vec<&'static TransitionGuard> {
    TRANSITION_GUARDS
        .iter()
        .filter(|g| g.to_stage <= target_stage && !g.passes(snapshot))
        .collect()
}

/// First guard that blocks a forward move to `target_stage`, checking the
/// whole chain from stage 1 in table order.
pub fn first_violation(
    target_stage: u8,
    snapshot: &SessionSnapshot,
) -> Option<&'static TransitionGuard> {
    TRANSITION_GUARDS
        .iter()
        .filter(|g| g.to_stage <= target_stage && g.from_stage < target_stage)
        .find(|g| !g.passes(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::SessionStatus;
    use serde_json::json;

    fn ready_for_analysis() -> SessionSnapshot {
        SessionSnapshot::new(SessionStatus::ContextPreview)
            .with_documents("fs.pdf", "notes.pdf")
            .with_metadata(json!({"company_name": "Acme"}))
            .with_framework("IFRS")
            .with_standards(["IAS 1"])
    }

    #[test]
    fn test_table_is_ordered_and_adjacent() {
        for (i, guard) in TRANSITION_GUARDS.iter().enumerate() {
            assert_eq!(usize::from(guard.from_stage), i + 1);
            assert_eq!(guard.to_stage, guard.from_stage + 1);
        }
    }

    #[test]
    fn test_can_enter_metadata_review() {
        assert!(!can_enter_metadata_review(&SessionSnapshot::default()));
        let one_file = SessionSnapshot {
            financial_statements_filename: Some("fs.pdf".to_string()),
            ..Default::default()
        };
        assert!(!can_enter_metadata_review(&one_file));
        assert!(can_enter_metadata_review(
            &SessionSnapshot::default().with_documents("fs.pdf", "notes.pdf")
        ));
    }

    #[test]
    fn test_can_enter_framework_selection() {
        let base = SessionSnapshot::default().with_documents("fs.pdf", "notes.pdf");
        assert!(!can_enter_framework_selection(&base));
        assert!(!can_enter_framework_selection(
            &base.clone().with_metadata(json!({"error": "extraction failed"}))
        ));
        assert!(can_enter_framework_selection(
            &base.with_metadata(json!({"company_name": "Acme"}))
        ));
    }

    #[test]
    fn test_can_enter_standards_selection() {
        assert!(!can_enter_standards_selection(&SessionSnapshot::default()));
        assert!(!can_enter_standards_selection(&SessionSnapshot::default().with_framework("")));
        assert!(can_enter_standards_selection(&SessionSnapshot::default().with_framework("US GAAP")));
    }

    #[test]
    fn test_standards_guards_share_predicate() {
        let empty = SessionSnapshot::default().with_standards(Vec::<String>::new());
        let one = SessionSnapshot::default().with_standards(["IFRS 16"]);
        assert!(!can_enter_context_preview(&empty));
        assert!(!can_enter_analysis(&empty));
        assert!(can_enter_context_preview(&one));
        assert!(can_enter_analysis(&one));
    }

    #[test]
    fn test_can_enter_results() {
        let done = ready_for_analysis().with_status(SessionStatus::Completed);
        assert!(!can_enter_results(&done));
        assert!(can_enter_results(&done.clone().with_results(json!({"summary": {}}))));
        assert!(!can_enter_results(&done.with_results(serde_json::Value::Null)));

        let failed = ready_for_analysis()
            .with_status(SessionStatus::Failed)
            .with_results(json!({"error": "model timeout"}));
        assert!(!can_enter_results(&failed));
    }

    #[test]
    fn test_blank_standards_block_context_preview() {
        let blank = SessionSnapshot::default().with_standards(["", "  "]);
        assert!(!can_enter_context_preview(&blank));
        assert!(!can_enter_analysis(&blank));
        assert!(!evaluate(4, 5, &blank));
    }

    #[test]
    fn test_violation_carries_message() {
        let snapshot = SessionSnapshot::default()
            .with_documents("fs.pdf", "notes.pdf")
            .with_metadata(json!({"company_name": "Acme"}));
        let guard = first_violation(4, &snapshot).unwrap();
        assert_eq!(
            guard.violation(),
            NavigationError::GuardViolation {
                from_stage: 3,
                to_stage: 4,
                message: "A compliance framework must be selected".to_string(),
            }
        );
    }

    #[test]
    fn test_evaluate_backward_always_passes() {
        let empty = SessionSnapshot::default();
        assert!(evaluate(5, 2, &empty));
        assert!(evaluate(3, 3, &empty));
    }

    #[test]
    fn test_evaluate_forward() {
        let snapshot = ready_for_analysis();
        assert!(evaluate(1, 2, &snapshot));
        assert!(evaluate(1, 6, &snapshot));
        assert!(!evaluate(6, 7, &snapshot));
        assert!(!evaluate(1, 2, &SessionSnapshot::default()));
    }

    #[test]
    fn test_evaluate_only_checks_edges_on_path() {
        // Framework missing, but 4 -> 5 only crosses the standards guard
        let snapshot = SessionSnapshot::default().with_standards(["IAS 7"]);
        assert!(evaluate(4, 5, &snapshot));
        assert!(!evaluate(3, 5, &snapshot));
    }

    #[test]
    fn test_evaluate_invalid_stages() {
        let snapshot = ready_for_analysis();
        assert!(!evaluate(0, 2, &snapshot));
        assert!(!evaluate(1, 8, &snapshot));
    }

    #[test]
    fn test_all_guards_up_to_collects_every_failure() {
        // Documents and standards present, metadata and framework missing
        let snapshot = SessionSnapshot::default()
            .with_documents("fs.pdf", "notes.pdf")
            .with_standards(["IAS 1"]);

        let failing: Vec<u8> = all_guards_up_to(7, &snapshot)
            .iter()
            .map(|g| g.from_stage)
            .collect();
        assert_eq!(failing, vec![2, 3, 6]);

        assert!(all_guards_up_to(2, &snapshot).is_empty());
        assert!(all_guards_up_to(1, &SessionSnapshot::default()).is_empty());
    }

    #[test]
    fn test_first_violation() {
        let snapshot = SessionSnapshot::default().with_documents("fs.pdf", "notes.pdf");
        assert!(first_violation(2, &snapshot).is_none());
        assert_eq!(first_violation(5, &snapshot).unwrap().from_stage, 2);
        assert!(first_violation(6, &ready_for_analysis()).is_none());
        assert_eq!(first_violation(7, &ready_for_analysis()).unwrap().from_stage, 6);
    }
}
