//! Search limits.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on queued paths. `0` or unset means unbounded.
    pub max_frontier: Option<usize>,
}

impl SearchConfig {
    pub fn effective_max_frontier(&self) -> Option<usize> {
        self.max_frontier.filter(|&n| n > 0)
    }
}
