//! Per-identifier sliding-window limiter.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::clock::{Clock, SystemClock};

/// Sliding-window rate limiter keyed by identifier.
///
/// Tracks the timestamps of admitted requests per identifier; only
/// timestamps newer than `now - window_ms` count toward the limit. State
/// lives behind a single mutex so the prune-count-record sequence is
/// observed as one atomic unit by concurrent callers.
pub struct RateLimiter {
    max_requests: usize,
    window_ms: u64,
    clock: Arc<dyn Clock>,
    requests: Mutex<HashMap<String, Vec<u64>>>,
}

impl RateLimiter {
    /// Limiter on the wall clock. Each call builds an independent limiter;
    /// two limiters never share admission counts, even with equal parameters.
    pub fn new(max_requests: u32, window_ms: u64) -> Self {
        Self::with_clock(max_requests, window_ms, Arc::new(SystemClock))
    }

    /// Limiter on an injected clock, for deterministic window tests.
    pub fn with_clock(max_requests: u32, window_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            max_requests: max_requests as usize,
            window_ms,
            clock,
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Admission check for one identifier: `true` records the attempt and
    /// allows it, `false` denies without recording.
    pub fn check(&self, id: &str) -> bool {
        let now = self.clock.now_ms();

        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Prune every key, not just the caller's: keeps memory bounded
        // without a background sweep. Keys left empty disappear entirely.
        // Age comparison instead of `t > now - window` keeps timestamps
        // near zero live when `now` is still inside the first window.
        requests.retain(|_, timestamps| {
            timestamps.retain(|&t| now.saturating_sub(t) < self.window_ms);
            !timestamps.is_empty()
        });

        let count = requests.get(id).map_or(0, Vec::len);
        if count >= self.max_requests {
            return false;
        }

        requests.entry(id.to_string()).or_default().push(now);
        true
    }

    /// Number of identifiers currently holding live timestamps. Prunes
    /// under the same lock first, so expired identifiers never count.
    pub fn tracked_identifiers(&self) -> usize {
        let now = self.clock.now_ms();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        requests.retain(|_, timestamps| {
            timestamps.retain(|&t| now.saturating_sub(t) < self.window_ms);
            !timestamps.is_empty()
        });
        requests.len()
    }
}
