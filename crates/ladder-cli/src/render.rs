//! Text and JSON rendering of search results.

use std::io::Write;

use ladder_core::Word;
use ladder_engine::{SearchOutcome, SearchStats};
use serde::Serialize;

pub const INVALID_INPUT_MESSAGE: &str =
    "Word to be searched for does not exist or lengths do not match!";

/// JSON shape of `--json` output.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub start: &'a str,
    pub goal: &'a str,
    pub found: bool,
    pub ladder: Option<Vec<Word>>,
    pub stats: &'a SearchStats,
}

pub fn render_text<W: Write>(
    output: &mut W,
    start: &str,
    goal: &str,
    outcome: &SearchOutcome,
) -> std::io::Result<()> {
    match outcome.words() {
        Some(words) => {
            if start == goal {
                writeln!(output, "Start and end word are the same.")?;
            }
            writeln!(output, "The shortest ladder from {start} to {goal} is:")?;
            for word in &words {
                writeln!(output, "{word}")?;
            }
            Ok(())
        }
        None => writeln!(output, "No ladder found between {start} and {goal}."),
    }
}

pub fn render_json<W: Write>(
    output: &mut W,
    start: &str,
    goal: &str,
    outcome: &SearchOutcome,
    stats: &SearchStats,
) -> std::io::Result<()> {
    let report = JsonReport {
        start,
        goal,
        found: outcome.is_found(),
        ladder: outcome.words(),
        stats,
    };
    serde_json::to_writer_pretty(&mut *output, &report)?;
    writeln!(output)
}
