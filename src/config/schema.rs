//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files and
//! carry defaults matching the storefront's shipped policies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::rate_limit::{Clock, RateLimiter};

/// Root configuration for the toolkit.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Rate-limit policies by purpose.
    pub rate_limits: RateLimitsConfig,

    /// Free-text sanitizer settings.
    pub sanitizer: SanitizerConfig,

    /// Security response header settings.
    pub headers: HeadersConfig,
}

impl GuardConfig {
    /// Look up a policy by name: `login`, `register`, or a custom entry.
    pub fn policy(&self, name: &str) -> Option<&RatePolicy> {
        match name {
            "login" => Some(&self.rate_limits.login),
            "register" => Some(&self.rate_limits.register),
            other => self.rate_limits.custom.get(other),
        }
    }

    /// Build an independent limiter for a named policy.
    pub fn limiter(&self, name: &str) -> Option<RateLimiter> {
        self.policy(name).map(RatePolicy::build)
    }
}

/// One sliding-window admission policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RatePolicy {
    /// Admissions allowed per window.
    pub max_requests: u32,

    /// Window duration in milliseconds.
    pub window_ms: u64,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window_ms: 60_000,
        }
    }
}

impl RatePolicy {
    /// Build a wall-clock limiter from this policy.
    pub fn build(&self) -> RateLimiter {
        RateLimiter::new(self.max_requests, self.window_ms)
    }

    /// Build a limiter on an injected clock.
    pub fn build_with_clock(&self, clock: Arc<dyn Clock>) -> RateLimiter {
        RateLimiter::with_clock(self.max_requests, self.window_ms, clock)
    }
}

/// Rate-limit policies by purpose.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitsConfig {
    /// Login attempts.
    pub login: RatePolicy,

    /// Registration attempts.
    pub register: RatePolicy,

    /// Additional named policies.
    pub custom: BTreeMap<String, RatePolicy>,
}

impl Default for RateLimitsConfig {
    fn default() -> Self {
        Self {
            login: RatePolicy {
                max_requests: 5,
                window_ms: 60_000,
            },
            register: RatePolicy {
                max_requests: 3,
                window_ms: 60_000,
            },
            custom: BTreeMap::new(),
        }
    }
}

/// Free-text sanitizer settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Maximum field length after sanitization, in characters.
    pub max_length: usize,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            max_length: crate::sanitize::MAX_INPUT_LEN,
        }
    }
}

impl SanitizerConfig {
    /// Run the sanitizer pipeline with this config's length cap.
    pub fn sanitize(&self, input: &str) -> String {
        crate::sanitize::sanitize_input_bounded(input, self.max_length)
    }
}

/// Security response header settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadersConfig {
    /// Emit the hardening header set at all.
    pub enabled: bool,

    /// Optional Content-Security-Policy value.
    pub csp: Option<String>,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            csp: None,
        }
    }
}

impl HeadersConfig {
    /// Header set per this config, or `None` when disabled.
    pub fn security_headers(&self) -> Option<crate::headers::SecurityHeaders> {
        if !self.enabled {
            return None;
        }
        Some(match &self.csp {
            Some(csp) => crate::headers::SecurityHeaders::with_csp(csp.clone()),
            None => crate::headers::SecurityHeaders::new(),
        })
    }
}
