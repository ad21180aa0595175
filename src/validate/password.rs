//! Password strength validation.

use super::ValidationResult;

/// Accepted special characters. A heuristic set, documented as a contract;
/// characters outside it simply do not count toward the special-char rule.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Check password strength. All five rules are evaluated independently;
/// each failure appends its own message, so a weak password reports every
/// missing ingredient at once.
pub fn validate_password(password: &str) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if password.chars().count() < MIN_PASSWORD_LEN {
        result.fail("password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        result.fail("password must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        result.fail("password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        result.fail("password must contain a digit");
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        result.fail("password must contain a special character");
    }

    result
}
