//! Recency index of byte-value occurrence positions.
//!
//! For every byte value the cache keeps the positions where that value was
//! recently seen, newest first. The match finder walks a value's list in
//! order of increasing distance and stops at the search horizon, so lookup
//! cost stays bounded by the window instead of the whole input. Positions
//! older than the window are dropped from the back as the tokenizer
//! advances.

use std::collections::VecDeque;

/// Per-byte-value lists of recent occurrence positions, newest first.
#[derive(Debug)]
pub struct RecencyCache {
    slots: [VecDeque<usize>; 256],
}

impl RecencyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| VecDeque::new()),
        }
    }

    /// Record that `value` occurred at `pos`. Positions must be added in
    /// increasing order for the newest-first invariant to hold.
    pub fn add(&mut self, value: u8, pos: usize) {
        self.slots[value as usize].push_front(pos);
    }

    /// Positions where `value` has been seen, newest first.
    pub fn positions(&self, value: u8) -> impl Iterator<Item = usize> + '_ {
        self.slots[value as usize].iter().copied()
    }

    /// Drop positions of `value` older than `floor`. A no-op when the list
    /// is empty or nothing is old enough.
    pub fn cull(&mut self, value: u8, floor: usize) {
        let slot = &mut self.slots[value as usize];
        while let Some(&oldest) = slot.back() {
            if oldest >= floor {
                break;
            }
            slot.pop_back();
        }
    }
}

impl Default for RecencyCache {
    fn default() -> Self {
        Self::new()
    }
}
