//! Atomic counter provider

use std::sync::atomic::{AtomicI64, Ordering};

use wirebox_domain::ports::Counter;

/// Counter backed by an `AtomicI64`
///
/// Interior mutability lets a shared singleton handle mutate through `&self`,
/// so every resolver of the same instance observes the same count.
#[derive(Debug, Default)]
pub struct AtomicCounter {
    value: AtomicI64,
}

impl AtomicCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }
}

impl Counter for AtomicCounter {
    fn value(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    fn increment(&self) {
        self.value.fetch_add(1, Ordering::SeqCst);
    }
}
