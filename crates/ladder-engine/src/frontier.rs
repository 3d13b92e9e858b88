//! FIFO frontier of candidate paths.

use std::collections::VecDeque;

use ladder_core::errors::SearchError;

use crate::path::LadderPath;

/// The BFS wavefront.
///
/// Paths are appended at the back and taken from the front, so every
/// depth-`d` path leaves the queue before any depth-`d + 1` path.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<LadderPath>,
    capacity_limit: Option<usize>,
    peak_len: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frontier that refuses to hold more than `limit` paths.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            capacity_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Append a path at the back.
    ///
    /// Fails with `ResourceExhaustion` when the configured limit is reached
    /// or the allocator cannot grow the queue; the queue is unchanged then.
    pub fn enqueue(&mut self, path: LadderPath) -> Result<(), SearchError> {
        let requested = self.queue.len() + 1;
        if self.capacity_limit.is_some_and(|limit| requested > limit) {
            return Err(SearchError::ResourceExhaustion {
                what: "frontier",
                requested,
            });
        }
        self.queue
            .try_reserve(1)
            .map_err(|_| SearchError::ResourceExhaustion {
                what: "frontier",
                requested,
            })?;
        self.queue.push_back(path);
        self.peak_len = self.peak_len.max(self.queue.len());
        Ok(())
    }

    /// Take the path at the front.
    pub fn dequeue(&mut self) -> Result<LadderPath, SearchError> {
        self.queue.pop_front().ok_or(SearchError::QueueEmpty)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Largest length reached since creation or the last `clear`.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.peak_len = 0;
    }
}
