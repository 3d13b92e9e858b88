//! Breadth-first ladder search.

pub mod engine;
pub mod types;
pub mod validation;

pub use engine::LadderSearch;
pub use types::{SearchOptions, SearchOutcome, SearchReport, SearchState, SearchStats};
pub use validation::validate_request;

use ladder_core::errors::SearchError;
use ladder_core::Word;

use crate::dictionary::WordSet;

/// Run one search over `dictionary` with default options.
///
/// Callers are expected to have run `validate_request` first.
pub fn search(
    dictionary: &mut WordSet,
    start: &Word,
    goal: &Word,
) -> Result<SearchOutcome, SearchError> {
    LadderSearch::new(dictionary).search(start, goal)
}

/// Load `words`, validate the request, and search.
///
/// Errors: `EmptyDictionary` for an empty word list, `InvalidInput` for a
/// length mismatch or a goal outside the dictionary, plus whatever the
/// search itself raises under `options`.
pub fn find_ladder<I, W>(
    words: I,
    start: &str,
    goal: &str,
    options: SearchOptions,
) -> Result<SearchReport, SearchError>
where
    I: IntoIterator<Item = W>,
    W: Into<Word>,
{
    let mut dictionary = WordSet::load(words)?;
    validate_request(&dictionary, start, goal)?;

    let mut engine = LadderSearch::with_options(&mut dictionary, options);
    let outcome = engine.search(&Word::new(start), &Word::new(goal))?;
    Ok(SearchReport {
        outcome,
        stats: engine.stats().clone(),
    })
}
