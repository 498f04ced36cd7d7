//! Monotonic identifier sequence
//!
//! Identifiers are issued by a plain counter owned by the record store.
//! Wall-clock-derived ids are deliberately not used: two inserts in the
//! same clock tick would collide, and the uniqueness invariant must hold
//! under all timing conditions.

use serde::{Deserialize, Serialize};

/// Monotonic id counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// A fresh sequence starting at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// A sequence resuming at `next`, used after a snapshot restore
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    /// Issues the next identifier
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The value the next call to [`next_id`](Self::next_id) will return
    pub fn watermark(&self) -> u64 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
