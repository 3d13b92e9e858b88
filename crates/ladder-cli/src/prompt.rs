//! Interactive prompts for the start and goal words.

use std::io::{BufRead, Write};

use crate::error::CliError;

pub const START_PROMPT: &str = "Enter word to start the search: ";
pub const GOAL_PROMPT: &str = "Enter word to be searched for: ";

/// Print `prompt` and read the first whitespace-separated token.
pub fn prompt_word<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, CliError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        let read = input.read_line(&mut line).map_err(|e| CliError::Input {
            message: e.to_string(),
        })?;
        if read == 0 {
            return Err(CliError::Input {
                message: "no word entered".to_string(),
            });
        }
        if let Some(word) = line.split_whitespace().next() {
            return Ok(word.to_string());
        }
    }
}
