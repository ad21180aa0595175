//! Structured security audit logging.
//!
//! # Responsibilities
//! - Record security-relevant moments (denied admissions, failed
//!   validations) as structured events
//! - Initialize the logging subsystem
//!
//! # Design Decisions
//! - Uses tracing for structured logging; the `audit` target lets hosts
//!   route security events separately from application noise
//! - Events carry a UUID so a UI alert can be matched to a log line
//! - Log level configurable via `RUST_LOG`, with a code-supplied fallback

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// One security-relevant occurrence, ready to emit.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityEvent {
    pub id: Uuid,
    /// Event class, e.g. `rate_limit_denied`.
    pub kind: String,
    /// What the event is about: an identifier, a field name.
    pub subject: String,
    /// Free-form structured detail.
    pub detail: Map<String, Value>,
}

impl SecurityEvent {
    pub fn new(kind: &str, subject: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: kind.to_string(),
            subject: subject.to_string(),
            detail: Map::new(),
        }
    }

    /// Attach one detail field.
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.detail.insert(key.to_string(), value.into());
        self
    }

    /// Emit the event as a warning on the `audit` target.
    pub fn emit(&self) {
        let detail = Value::Object(self.detail.clone());
        tracing::warn!(
            target: "audit",
            id = %self.id,
            kind = %self.kind,
            subject = %self.subject,
            detail = %detail,
            "security event"
        );
    }
}

/// Record a denied rate-limiter admission.
pub fn rate_limit_denied(limiter: &str, identifier: &str) {
    SecurityEvent::new("rate_limit_denied", identifier)
        .with_detail("limiter", limiter)
        .emit();
}

/// Record a failed field validation with its messages.
pub fn validation_failed(field: &str, errors: &[String]) {
    SecurityEvent::new("validation_failed", field)
        .with_detail(
            "errors",
            Value::Array(errors.iter().map(|e| Value::String(e.clone())).collect()),
        )
        .emit();
}

/// Install the global tracing subscriber. `RUST_LOG` wins when set;
/// otherwise `fallback_level` applies (e.g. `"info"` or `"formguard=debug"`).
/// Calling twice is harmless; the second call is a no-op.
pub fn init_logging(fallback_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
