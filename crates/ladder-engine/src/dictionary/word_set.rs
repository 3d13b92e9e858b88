//! `WordSet`: dictionary words in insertion order with visited flags.

use ladder_core::errors::DictionaryError;
use ladder_core::types::collections::FxHashMap;
use ladder_core::Word;
use smallvec::SmallVec;

use crate::adjacency::is_one_edit;

/// Neighbor snapshot for one expansion step. Most words in a natural
/// dictionary have only a handful of one-edit neighbors.
pub(crate) type NeighborIds = SmallVec<[usize; 8]>;

/// A dictionary word and whether the current search has claimed it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DictEntry {
    word: Word,
    visited: bool,
}

/// The dictionary searched by `LadderSearch`.
///
/// Entries keep insertion order, which fixes the tie-break between
/// equal-length ladders. Repeated words are collapsed to their first
/// occurrence so that a word can only ever be claimed once.
#[derive(Debug, Clone)]
pub struct WordSet {
    entries: Vec<DictEntry>,
    index: FxHashMap<Word, usize>,
    visited_count: usize,
}

impl WordSet {
    /// Build a set with every entry unvisited.
    pub fn load<I, W>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        let mut entries = Vec::new();
        let mut index = FxHashMap::default();
        let mut duplicates = 0usize;

        for word in words {
            let word = word.into();
            if index.contains_key(&word) {
                duplicates += 1;
                continue;
            }
            index.insert(word.clone(), entries.len());
            entries.push(DictEntry {
                word,
                visited: false,
            });
        }

        if entries.is_empty() {
            return Err(DictionaryError::EmptyDictionary);
        }

        tracing::debug!(entries = entries.len(), duplicates, "word set loaded");

        Ok(Self {
            entries,
            index,
            visited_count: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a loaded set; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// `None` when the word is not in the set.
    pub fn is_visited(&self, word: &str) -> Option<bool> {
        self.index.get(word).map(|&id| self.entries[id].visited)
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Mark a member word as visited. Idempotent.
    pub fn mark_visited(&mut self, word: &str) -> Result<(), DictionaryError> {
        let id = *self
            .index
            .get(word)
            .ok_or_else(|| DictionaryError::WordNotFound {
                word: word.to_string(),
            })?;
        self.mark_visited_at(id);
        Ok(())
    }

    /// Unvisited one-edit neighbors of `word`, in insertion order.
    ///
    /// The iterator borrows the set, so no flag can change while it is
    /// alive. Callers that mark words as they go must collect first.
    pub fn unvisited_neighbors<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a Word> + 'a {
        self.entries
            .iter()
            .filter(move |entry| !entry.visited && is_one_edit(word, entry.word.as_str()))
            .map(|entry| &entry.word)
    }

    /// Clear every visited flag so the set can serve another search.
    pub fn reset_visited(&mut self) {
        for entry in &mut self.entries {
            entry.visited = false;
        }
        self.visited_count = 0;
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|entry| &entry.word)
    }

    /// Snapshot of the entry ids `unvisited_neighbors` would yield.
    pub(crate) fn unvisited_neighbor_ids(&self, word: &str) -> NeighborIds {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.visited && is_one_edit(word, entry.word.as_str()))
            .map(|(id, _)| id)
            .collect()
    }

    /// Mark an entry by id and return its word.
    pub(crate) fn mark_visited_at(&mut self, id: usize) -> &Word {
        let entry = &mut self.entries[id];
        if !entry.visited {
            entry.visited = true;
            self.visited_count += 1;
        }
        &entry.word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordSet {
        WordSet::load(words.iter().copied()).unwrap()
    }

    #[test]
    fn test_load_empty_fails() {
        let err = WordSet::load(Vec::<Word>::new()).unwrap_err();
        assert_eq!(err, DictionaryError::EmptyDictionary);
    }

    #[test]
    fn test_load_collapses_duplicates() {
        let ws = set(&["cat", "bat", "cat", "bat", "bot"]);
        assert_eq!(ws.len(), 3);
        let words: Vec<&str> = ws.words().map(Word::as_str).collect();
        assert_eq!(words, vec!["cat", "bat", "bot"]);
    }

    #[test]
    fn test_contains() {
        let ws = set(&["cat", "dog"]);
        assert!(ws.contains("dog"));
        assert!(!ws.contains("cow"));
        assert!(!ws.contains("Dog"));
    }

    #[test]
    fn test_mark_visited() {
        let mut ws = set(&["cat", "bat"]);
        assert_eq!(ws.is_visited("cat"), Some(false));
        ws.mark_visited("cat").unwrap();
        ws.mark_visited("cat").unwrap();
        assert_eq!(ws.is_visited("cat"), Some(true));
        assert_eq!(ws.visited_count(), 1);
    }

    #[test]
    fn test_mark_visited_missing_word() {
        let mut ws = set(&["cat"]);
        let err = ws.mark_visited("cow").unwrap_err();
        assert_eq!(
            err,
            DictionaryError::WordNotFound {
                word: "cow".to_string()
            }
        );
        assert_eq!(ws.is_visited("cow"), None);
    }

    #[test]
    fn test_unvisited_neighbors_in_insertion_order() {
        let ws = set(&["cot", "bat", "dog", "cat", "hat", "cab"]);
        let found: Vec<&str> = ws.unvisited_neighbors("cat").map(Word::as_str).collect();
        assert_eq!(found, vec!["cot", "bat", "hat", "cab"]);
    }

    #[test]
    fn test_unvisited_neighbors_skips_visited() {
        let mut ws = set(&["cot", "bat", "hat"]);
        ws.mark_visited("bat").unwrap();
        let found: Vec<&str> = ws.unvisited_neighbors("cat").map(Word::as_str).collect();
        assert_eq!(found, vec!["cot", "hat"]);
        assert_eq!(ws.unvisited_neighbor_ids("cat").as_slice(), &[0, 2]);
    }

    #[test]
    fn test_reset_visited() {
        let mut ws = set(&["cot", "bat"]);
        ws.mark_visited("cot").unwrap();
        ws.mark_visited("bat").unwrap();
        ws.reset_visited();
        assert_eq!(ws.visited_count(), 0);
        assert_eq!(ws.unvisited_neighbors("cat").count(), 2);
    }
}
