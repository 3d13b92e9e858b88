//! One CLI invocation: resolve config, load the dictionary, read the two
//! words, validate, search, render.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use ladder_core::errors::SearchError;
use ladder_core::{LadderConfig, Word};
use ladder_engine::{validate_request, LadderSearch, SearchOptions};

use crate::error::{CliError, CliExitCode};
use crate::prompt::{prompt_word, GOAL_PROMPT, START_PROMPT};
use crate::render::{render_json, render_text, INVALID_INPUT_MESSAGE};
use crate::source::load_dictionary;

/// Resolved inputs for one run.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub start: Option<String>,
    pub goal: Option<String>,
    pub dictionary: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Execute a run against the given streams.
///
/// Returns `Success` once a search completes, found or not. A rejected
/// start/goal pair prints the validation message and returns `Failure`.
pub fn run<R: BufRead, W: Write>(
    request: RunRequest,
    root: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<CliExitCode, CliError> {
    let config = LadderConfig::load(root, request.config.as_deref())?;
    let dictionary_path = request
        .dictionary
        .clone()
        .unwrap_or_else(|| root.join(config.dictionary.effective_path()));
    let mut dictionary = load_dictionary(&dictionary_path)?;

    let start = match request.start {
        Some(word) => word,
        None => prompt_word(input, output, START_PROMPT)?,
    };
    let goal = match request.goal {
        Some(word) => word,
        None => prompt_word(input, output, GOAL_PROMPT)?,
    };

    match validate_request(&dictionary, &start, &goal) {
        Ok(()) => {}
        Err(err @ SearchError::InvalidInput { .. }) => {
            tracing::warn!(error = %err, "request rejected");
            writeln!(output, "{INVALID_INPUT_MESSAGE}")?;
            return Ok(CliExitCode::Failure);
        }
        Err(err) => return Err(err.into()),
    }

    let options = SearchOptions::from_config(&config.search);
    let mut engine = LadderSearch::with_options(&mut dictionary, options);
    let outcome = engine.search(&Word::new(&start), &Word::new(&goal))?;

    if request.json {
        render_json(output, &start, &goal, &outcome, engine.stats())?;
    } else {
        render_text(output, &start, &goal, &outcome)?;
    }
    Ok(CliExitCode::Success)
}
