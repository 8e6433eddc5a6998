//! Reachability: the highest stage a session's data permits

use crate::schemas::SessionSnapshot;

use super::catalog::FIRST_STAGE;
use super::guards::TRANSITION_GUARDS;

/// Compute the highest stage reachable by walking the guard table from
/// stage 1.
///
/// The walk stops at the first failing guard: stages are causally ordered,
/// so a later guard passing in isolation does not lift the cap. Without a
/// snapshot only the first stage is reachable.
pub fn compute_max_reachable(snapshot: Option<&SessionSnapshot>) -> u8 {
    let Some(snapshot) = snapshot else {
        return FIRST_STAGE;
    };

    let mut current_max = FIRST_STAGE;
    for guard in TRANSITION_GUARDS.iter() {
        if guard.from_stage != current_max || !guard.passes(snapshot) {
            break;
        }
        current_max = guard.to_stage;
    }
    current_max
}
