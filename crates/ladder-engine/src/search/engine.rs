//! The BFS loop.
//!
//! Words are claimed (marked visited) the moment they are discovered, not
//! when their path is later dequeued. Two sibling paths expanded in the same
//! step therefore cannot both branch to the same neighbor, and the first
//! path that reaches the goal has minimum length.

use ladder_core::errors::SearchError;
use ladder_core::Word;

use crate::dictionary::WordSet;
use crate::frontier::Frontier;
use crate::path::LadderPath;

use super::types::{SearchOptions, SearchOutcome, SearchState, SearchStats};

/// Shortest-ladder search over a borrowed dictionary.
///
/// The search owns its frontier and every in-flight path. Visited flags in
/// the dictionary are cleared at the start of each `search` call, so one
/// `LadderSearch` (or one `WordSet`) can serve several sequential searches.
pub struct LadderSearch<'d> {
    dictionary: &'d mut WordSet,
    frontier: Frontier,
    options: SearchOptions,
    state: SearchState,
    stats: SearchStats,
}

impl<'d> LadderSearch<'d> {
    pub fn new(dictionary: &'d mut WordSet) -> Self {
        Self::with_options(dictionary, SearchOptions::default())
    }

    pub fn with_options(dictionary: &'d mut WordSet, options: SearchOptions) -> Self {
        let frontier = match options.max_frontier {
            Some(limit) => Frontier::with_limit(limit),
            None => Frontier::new(),
        };
        Self {
            dictionary,
            frontier,
            options,
            state: SearchState::Idle,
            stats: SearchStats::default(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the shortest ladder from `start` to `goal`.
    ///
    /// Assumes the request passed `validate_request`. Returns
    /// `SearchOutcome::NotFound` when the goal is unreachable; errors are
    /// reserved for cancellation and resource exhaustion.
    pub fn search(&mut self, start: &Word, goal: &Word) -> Result<SearchOutcome, SearchError> {
        self.begin();

        if start == goal {
            self.state = SearchState::Found;
            self.stats.max_depth = 1;
            tracing::debug!(%start, "start equals goal, trivial ladder");
            return Ok(SearchOutcome::Found(LadderPath::seed(start.clone())));
        }

        match self.run(start, goal) {
            Ok(outcome) => {
                self.state = if outcome.is_found() {
                    SearchState::Found
                } else {
                    SearchState::Exhausted
                };
                tracing::info!(
                    %start,
                    %goal,
                    state = %self.state,
                    expanded = self.stats.expanded,
                    enqueued = self.stats.enqueued,
                    peak_frontier = self.stats.peak_frontier,
                    "ladder search finished"
                );
                Ok(outcome)
            }
            Err(err) => {
                self.state = SearchState::Aborted;
                self.stats.peak_frontier = self.frontier.peak_len();
                tracing::warn!(
                    %start,
                    %goal,
                    error = %err,
                    expanded = self.stats.expanded,
                    peak_frontier = self.stats.peak_frontier,
                    "ladder search aborted"
                );
                Err(err)
            }
        }
    }

    fn begin(&mut self) {
        if self.dictionary.visited_count() > 0 {
            tracing::debug!(
                visited = self.dictionary.visited_count(),
                "clearing visited flags from previous search"
            );
            self.dictionary.reset_visited();
        }
        self.frontier.clear();
        self.stats = SearchStats::default();
        self.state = SearchState::Running;
    }

    fn run(&mut self, start: &Word, goal: &Word) -> Result<SearchOutcome, SearchError> {
        self.frontier.enqueue(LadderPath::seed(start.clone()))?;
        if self.dictionary.mark_visited(start.as_str()).is_err() {
            tracing::trace!(%start, "start word is not a dictionary word");
        }

        while !self.frontier.is_empty() {
            if self.options.cancellation.is_cancelled() {
                return Err(SearchError::Cancelled {
                    expanded: self.stats.expanded,
                });
            }

            let current = self.frontier.dequeue()?;
            let word = current.last()?.clone();
            self.stats.expanded += 1;
            self.stats.max_depth = self.stats.max_depth.max(current.len());

            if word == *goal {
                self.stats.peak_frontier = self.frontier.peak_len();
                return Ok(SearchOutcome::Found(current));
            }

            // Snapshot first: marking needs `&mut` on the dictionary.
            let neighbors = self.dictionary.unvisited_neighbor_ids(word.as_str());
            tracing::trace!(%word, depth = current.len(), neighbors = neighbors.len(), "expanding");

            for id in neighbors {
                let next = self.dictionary.mark_visited_at(id).clone();
                self.frontier.enqueue(current.branch(next))?;
                self.stats.enqueued += 1;
            }
        }

        self.stats.peak_frontier = self.frontier.peak_len();
        Ok(SearchOutcome::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::CancellationToken;

    fn dict(words: &[&str]) -> WordSet {
        WordSet::load(words.iter().copied()).unwrap()
    }

    fn ladder(outcome: &SearchOutcome) -> Vec<String> {
        outcome
            .words()
            .expect("expected a ladder")
            .iter()
            .map(Word::to_string)
            .collect()
    }

    #[test]
    fn test_finds_shortest_ladder() {
        let mut ws = dict(&["cat", "bat", "bot", "bog", "dog"]);
        let mut engine = LadderSearch::new(&mut ws);
        let outcome = engine
            .search(&Word::new("cat"), &Word::new("dog"))
            .unwrap();
        assert_eq!(ladder(&outcome), vec!["cat", "bat", "bot", "bog", "dog"]);
        assert_eq!(engine.state(), SearchState::Found);
    }

    #[test]
    fn test_exhausted_when_unreachable() {
        let mut ws = dict(&["cat", "dog"]);
        let mut engine = LadderSearch::new(&mut ws);
        let outcome = engine
            .search(&Word::new("cat"), &Word::new("dog"))
            .unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(engine.state(), SearchState::Exhausted);
        assert_eq!(engine.stats().expanded, 1);
    }

    #[test]
    fn test_same_word_is_trivial() {
        let mut ws = dict(&["same"]);
        let mut engine = LadderSearch::new(&mut ws);
        let outcome = engine
            .search(&Word::new("same"), &Word::new("same"))
            .unwrap();
        assert_eq!(ladder(&outcome), vec!["same"]);
        assert_eq!(engine.stats().expanded, 0);
    }

    #[test]
    fn test_tie_break_follows_insertion_order() {
        // cat -> cot -> dot and cat -> dat -> dot are both length 3.
        let mut ws = dict(&["dat", "cot", "dot"]);
        let outcome = LadderSearch::new(&mut ws)
            .search(&Word::new("cat"), &Word::new("dot"))
            .unwrap();
        assert_eq!(ladder(&outcome), vec!["cat", "dat", "dot"]);

        let mut ws = dict(&["cot", "dat", "dot"]);
        let outcome = LadderSearch::new(&mut ws)
            .search(&Word::new("cat"), &Word::new("dot"))
            .unwrap();
        assert_eq!(ladder(&outcome), vec!["cat", "cot", "dot"]);
    }

    #[test]
    fn test_marks_on_discovery() {
        // Both "bat" and "cot" reach "bot"; only one branch may claim it.
        let mut ws = dict(&["bat", "cot", "bot", "bog"]);
        let mut engine = LadderSearch::new(&mut ws);
        let outcome = engine
            .search(&Word::new("cat"), &Word::new("bog"))
            .unwrap();
        assert_eq!(ladder(&outcome), vec!["cat", "bat", "bot", "bog"]);
        // cat expands to bat, cot; bat expands to bot; bot expands to bog.
        assert_eq!(engine.stats().enqueued, 4);
    }

    #[test]
    fn test_reuse_clears_visited_flags() {
        let mut ws = dict(&["cat", "bat", "bot"]);
        let mut engine = LadderSearch::new(&mut ws);
        let first = engine.search(&Word::new("cat"), &Word::new("bot")).unwrap();
        let second = engine.search(&Word::new("cat"), &Word::new("bot")).unwrap();
        assert_eq!(first, second);
        assert!(second.is_found());
    }

    #[test]
    fn test_cancelled_search_aborts() {
        let token = CancellationToken::new();
        token.cancel();
        let mut ws = dict(&["cat", "bat"]);
        let options = SearchOptions::default().with_cancellation(token);
        let mut engine = LadderSearch::with_options(&mut ws, options);
        let err = engine
            .search(&Word::new("cat"), &Word::new("bat"))
            .unwrap_err();
        assert_eq!(err, SearchError::Cancelled { expanded: 0 });
        assert_eq!(engine.state(), SearchState::Aborted);
    }

    #[test]
    fn test_frontier_limit_surfaces_resource_exhaustion() {
        let mut ws = dict(&["bat", "hat", "mat", "rat", "sat", "zzz"]);
        let options = SearchOptions {
            max_frontier: Some(2),
            ..SearchOptions::default()
        };
        let mut engine = LadderSearch::with_options(&mut ws, options);
        let err = engine
            .search(&Word::new("cat"), &Word::new("zzz"))
            .unwrap_err();
        assert!(matches!(err, SearchError::ResourceExhaustion { .. }));
        assert_eq!(engine.state(), SearchState::Aborted);
        assert_eq!(engine.stats().expanded, 1);
        assert_eq!(engine.stats().peak_frontier, 2);
    }

    #[test]
    fn test_start_outside_dictionary() {
        let mut ws = dict(&["cot", "dot"]);
        let outcome = search_default(&mut ws, "cat", "dot");
        assert_eq!(ladder(&outcome), vec!["cat", "cot", "dot"]);
    }

    fn search_default(ws: &mut WordSet, start: &str, goal: &str) -> SearchOutcome {
        crate::search::search(ws, &Word::new(start), &Word::new(goal)).unwrap()
    }
}
