//! Word list parsing. Words are whitespace-separated tokens, so both
//! one-word-per-line files and free-form lists are accepted.

use std::io::{self, BufRead};

use ladder_core::Word;

/// Split `text` into words, preserving order and duplicates.
pub fn parse_words(text: &str) -> Vec<Word> {
    text.split_whitespace().map(Word::from).collect()
}

/// Read every word from `reader`.
///
/// Input is split on ASCII whitespace at the byte level. Tokens that are not
/// valid UTF-8 are skipped with a warning; they never abort the read.
pub fn read_words<R: BufRead>(mut reader: R) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    let mut skipped = 0usize;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        for token in line
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty())
        {
            match std::str::from_utf8(token) {
                Ok(text) => words.push(Word::from(text)),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(
                        token = %String::from_utf8_lossy(token),
                        error = %e,
                        "skipping word that is not valid UTF-8"
                    );
                }
            }
        }
    }

    tracing::debug!(words = words.len(), skipped, "word list read");
    Ok(words)
}
