//! Search outcome, state, options, and statistics.

use std::fmt;

use ladder_core::config::SearchConfig;
use ladder_core::{CancellationToken, Word};
use serde::Serialize;

use crate::path::LadderPath;

/// Lifecycle of a `LadderSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    /// No search has run yet.
    Idle,
    Running,
    /// The goal was dequeued.
    Found,
    /// The frontier drained without reaching the goal.
    Exhausted,
    /// Stopped by cancellation or resource exhaustion.
    Aborted,
}

impl SearchState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Found => "found",
            Self::Exhausted => "exhausted",
            Self::Aborted => "aborted",
        }
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a completed search. `NotFound` is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(LadderPath),
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn ladder(&self) -> Option<&LadderPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }

    /// The ladder as words, start first.
    pub fn words(&self) -> Option<Vec<Word>> {
        self.ladder().map(LadderPath::to_sequence)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Paths dequeued and examined.
    pub expanded: usize,
    /// Branched paths pushed onto the frontier.
    pub enqueued: usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
    /// Length of the longest path dequeued.
    pub max_depth: usize,
}

/// Knobs for one search run.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Maximum number of queued paths; `None` is unbounded.
    pub max_frontier: Option<usize>,
    pub cancellation: CancellationToken,
}

impl SearchOptions {
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            max_frontier: config.effective_max_frontier(),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }
}

/// Outcome plus statistics, as returned by `find_ladder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}
