//! Syntactic email validation.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum accepted email length, in characters.
pub const MAX_EMAIL_LEN: usize = 254;

// Deliberately permissive: one @, at least one dot after it, no whitespace.
// Not an RFC 5322 parser; the mail server has the final word.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// True when the string looks like an email address and is at most
/// [`MAX_EMAIL_LEN`] characters long. Syntactic sanity only.
pub fn validate_email(email: &str) -> bool {
    email.chars().count() <= MAX_EMAIL_LEN && EMAIL_SHAPE.is_match(email)
}
