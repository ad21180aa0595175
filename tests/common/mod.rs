//! Shared utilities for integration testing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use formguard::rate_limit::Clock;

/// Manually advanced clock; lets window tests run without real delays.
pub struct ManualClock(AtomicU64);

impl ManualClock {
    pub fn at(ms: u64) -> Arc<Self> {
        Arc::new(Self(AtomicU64::new(ms)))
    }

    pub fn set(&self, ms: u64) {
        self.0.store(ms, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}
