//! Form field validation.
//!
//! # Responsibilities
//! - Syntactic email check (shape + length, not deliverability)
//! - Password strength check with per-failure messages
//! - Display-name check for registration forms
//!
//! # Design Decisions
//! - Checks are pure functions; no I/O, no stored state
//! - Every check runs and every failure is reported, not just the first
//! - No check panics for any input, empty strings included

use serde::Serialize;

pub mod email;
pub mod password;

pub use email::validate_email;
pub use password::validate_password;

/// Outcome of a multi-check validation. `valid` is true exactly when
/// `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no errors.
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub(crate) fn fail(&mut self, message: &str) {
        self.valid = false;
        self.errors.push(message.to_string());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validate a display name: at least 2 characters after trimming.
pub fn validate_name(name: &str) -> ValidationResult {
    let mut result = ValidationResult::ok();
    if name.trim().chars().count() < 2 {
        result.fail("name must be at least 2 characters");
    }
    result
}
