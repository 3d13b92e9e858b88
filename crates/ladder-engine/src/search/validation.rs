//! Request checks performed before any search runs.

use ladder_core::errors::{InvalidInputReason, SearchError};

use crate::dictionary::WordSet;

/// Reject a start/goal pair of different lengths, or a goal that is not in
/// the dictionary. The start word itself need not be a dictionary word.
pub fn validate_request(dictionary: &WordSet, start: &str, goal: &str) -> Result<(), SearchError> {
    let reason = if start.len() != goal.len() {
        InvalidInputReason::LengthMismatch
    } else if !dictionary.contains(goal) {
        InvalidInputReason::GoalNotInDictionary
    } else {
        return Ok(());
    };

    tracing::debug!(start, goal, %reason, "rejected ladder request");
    Err(SearchError::InvalidInput {
        start: start.to_string(),
        goal: goal.to_string(),
        reason,
    })
}
