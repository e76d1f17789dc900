//! Bounded history of the most recent wrong predictions.

use std::collections::VecDeque;

use vigil_core::models::WrongPrediction;

/// FIFO buffer that keeps the last `capacity` wrong predictions.
///
/// When full, pushing evicts the oldest entry. Reads return newest-first,
/// which is the order the review surface and alert samples want.
#[derive(Debug)]
pub struct RecentBuffer {
    capacity: usize,
    buffer: VecDeque<WrongPrediction>,
}

impl RecentBuffer {
    /// Create a buffer holding at most `capacity` entries. A capacity of
    /// zero is clamped to one so the buffer always retains the latest event.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, event: WrongPrediction) {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event);
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<WrongPrediction> {
        self.buffer.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
