//! Free-text input sanitization.
//!
//! A best-effort denylist filter for fields that are stored and later shown
//! as plain text, never rendered as raw HTML. Narrower by design than
//! [`crate::escape`]; anything headed for markup goes through escaping
//! regardless of whether it passed through here.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a sanitized field, in characters.
pub const MAX_INPUT_LEN: usize = 1000;

/// Denylist patterns, applied in order after trimming.
static DENYLIST: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Angle brackets outright; escaping is the rendering path's job
        Regex::new(r"[<>]").unwrap(),
        Regex::new(r"(?i)javascript:").unwrap(),
        Regex::new(r"(?i)vbscript:").unwrap(),
        // Inline event-handler shapes: onclick=, onload=, ...
        // ASCII-only word chars; the contract's `\w` predates Unicode-aware
        // regex classes and attribute names are ASCII anyway
        Regex::new(r"(?i)on(?-u:\w)+=").unwrap(),
    ]
});

/// Sanitize one free-text field.
///
/// Pipeline, in this exact order: trim, strip `<`/`>`, remove `javascript:`
/// and `vbscript:` (case-insensitive), remove `on<word>=` event-handler
/// shapes, truncate to [`MAX_INPUT_LEN`] characters. Truncation cuts on a
/// character boundary and never splits a code point.
pub fn sanitize_input(input: &str) -> String {
    sanitize_input_bounded(input, MAX_INPUT_LEN)
}

/// Same pipeline with a caller-chosen length cap, for hosts that configure
/// a different field limit.
pub fn sanitize_input_bounded(input: &str, max_chars: usize) -> String {
    let mut out = input.trim().to_string();
    for pattern in DENYLIST.iter() {
        out = pattern.replace_all(&out, "").into_owned();
    }
    if let Some((idx, _)) = out.char_indices().nth(max_chars) {
        out.truncate(idx);
    }
    out
}

/// Total-function seam for callers holding optional text: `None` becomes `""`.
pub fn sanitize_input_opt(input: Option<&str>) -> String {
    input.map(sanitize_input).unwrap_or_default()
}
