//! In-memory sequential id counter

use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::ports::IdGenerator;

const FIRST_ID: u64 = 1;

/// Atomic counter handing out 1, 2, 3, ...
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Create a counter whose first id is 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(FIRST_ID),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.next.store(FIRST_ID, Ordering::Relaxed);
    }
}
