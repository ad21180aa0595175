//! Sliding-window rate limiting.
//!
//! # Data Flow
//! ```text
//! check("login:user@example.com")
//!     → prune every key's timestamps to the live window
//!     → count this identifier's remaining timestamps
//!     → at limit: deny, record nothing
//!     → below limit: record now, allow
//! ```
//!
//! # Design Decisions
//! - One mutex per limiter, held for the whole check-and-record, so a race
//!   between count and append can never over-admit
//! - Lazy pruning on every call, no background sweep task
//! - Clock is injected; tests drive the window without wall-clock delays
//! - Limiters are independent: each owns its map, even with equal parameters

pub mod clock;
pub mod limiter;

pub use clock::{Clock, SystemClock};
pub use limiter::RateLimiter;
