//! Security toolkit for storefront client code.
//!
//! Provides the pieces form-handling code needs before anything reaches the
//! network: HTML escaping, free-text sanitization, email/password validation,
//! sliding-window rate limiting, security response headers, and a structured
//! audit log.
//!
//! # Data Flow
//! ```text
//! User input
//!     → sanitize (denylist pipeline, free-text fields)
//!     → validate (email / password / name checks)
//!     → rate_limit (per-identifier admission before submit)
//!     → audit (structured record of denials / failures)
//!
//! Rendering path:
//!     → escape (entity substitution before interpolating text into markup)
//!     → headers (response header set + CSP for the hosting layer)
//! ```
//!
//! # Design Decisions
//! - Every toolkit function is total: no panic for any input, safe defaults
//!   over errors. Only config loading returns `Result`.
//! - No hidden globals: callers construct limiters, header sets, and event
//!   buses and own them explicitly.
//! - Denylists are documented contracts, kept exactly as specified rather
//!   than grown into an allowlist sanitizer.

pub mod audit;
pub mod config;
pub mod escape;
pub mod events;
pub mod headers;
pub mod rate_limit;
pub mod sanitize;
pub mod validate;

pub use config::GuardConfig;
pub use escape::escape_html;
pub use rate_limit::RateLimiter;
pub use sanitize::sanitize_input;
pub use validate::{validate_email, validate_password, ValidationResult};
