//! `LadderPath`: one candidate ladder from the start word to a frontier word.
//!
//! Paths are persistent singly-linked chains that point from the newest
//! word back to the start. `branch` allocates one link that shares its
//! parent's chain, so sibling branches never copy history and can never
//! observe each other's additions.

use std::fmt;
use std::sync::Arc;

use ladder_core::errors::SearchError;
use ladder_core::Word;
use serde::{Serialize, Serializer};

#[derive(Debug)]
struct Link {
    word: Word,
    parent: Option<Arc<Link>>,
}

/// An immutable, cheaply clonable word path.
#[derive(Clone, Default)]
pub struct LadderPath {
    tip: Option<Arc<Link>>,
    len: usize,
}

impl LadderPath {
    /// A one-word path holding only `start`.
    pub fn seed(start: Word) -> Self {
        Self {
            tip: Some(Arc::new(Link {
                word: start,
                parent: None,
            })),
            len: 1,
        }
    }

    /// A new path equal to `self` with `next` appended. `self` is untouched.
    pub fn branch(&self, next: Word) -> Self {
        Self {
            tip: Some(Arc::new(Link {
                word: next,
                parent: self.tip.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// The most recently appended word.
    pub fn last(&self) -> Result<&Word, SearchError> {
        self.tip
            .as_deref()
            .map(|link| &link.word)
            .ok_or(SearchError::EmptyPath)
    }

    /// Number of words, start and last included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Words from last back to start.
    pub fn iter_rev(&self) -> impl Iterator<Item = &Word> {
        let mut cursor = self.tip.as_deref();
        std::iter::from_fn(move || {
            let link = cursor?;
            cursor = link.parent.as_deref();
            Some(&link.word)
        })
    }

    /// The full ladder, start first.
    pub fn to_sequence(&self) -> Vec<Word> {
        let mut words: Vec<Word> = Vec::with_capacity(self.len);
        words.extend(self.iter_rev().cloned());
        words.reverse();
        words
    }
}

impl Drop for LadderPath {
    // Unlink iteratively; the default recursive drop of a long chain
    // would overflow the stack.
    fn drop(&mut self) {
        let mut cursor = self.tip.take();
        while let Some(link) = cursor {
            match Arc::try_unwrap(link) {
                Ok(mut owned) => cursor = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for LadderPath {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter_rev().eq(other.iter_rev())
    }
}

impl Eq for LadderPath {}

impl fmt::Debug for LadderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_sequence()).finish()
    }
}

impl Serialize for LadderPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_sequence())
    }
}
