//! View models bridging resolved services to the presentation shell
//!
//! Each adapter consumes exactly one service via constructor injection and
//! exposes a field the shell can display. Mutations triggered through an
//! adapter re-read the service so the published field never drifts from the
//! service state.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::Serialize;

use wirebox_domain::ports::{Counter, MessageProvider};

/// Greeting panel adapter
///
/// Captures the provider's message once at construction; the message is
/// constant for the adapter's lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct MessageViewModel {
    message: String,
}

impl MessageViewModel {
    /// Build from an injected message provider
    pub fn new(provider: Arc<dyn MessageProvider>) -> Self {
        Self {
            message: provider.message().to_owned(),
        }
    }

    /// The message to display
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Counter panel adapter
///
/// Holds the injected counter service and a published copy of its count.
/// The copy starts at zero and is refreshed from the service after every
/// mutation triggered through this adapter.
pub struct CounterViewModel {
    counter: Arc<dyn Counter>,
    count: AtomicI64,
}

impl CounterViewModel {
    /// Build from an injected counter service
    pub fn new(counter: Arc<dyn Counter>) -> Self {
        Self {
            counter,
            count: AtomicI64::new(0),
        }
    }

    /// Published count as of the last mutation triggered through this adapter
    pub fn count(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Increment the underlying counter, then re-read its value into the
    /// published count
    pub fn increment(&self) {
        self.counter.increment();
        self.count.store(self.counter.value(), Ordering::SeqCst);
    }
}
