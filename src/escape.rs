//! HTML escaping via explicit entity substitution.
//!
//! # Responsibilities
//! - Make arbitrary text safe to interpolate into HTML as text content
//! - Preserve everything that is not an HTML metacharacter, Unicode included
//!
//! # Design Decisions
//! - Substitution table, not a DOM round-trip: the function works anywhere
//!   and is deterministic under test
//! - Output can never open a new element or attribute boundary

/// Escape the five HTML metacharacters (`&`, `<`, `>`, `"`, `'`).
///
/// All other characters pass through verbatim. Escaping `&` first is implicit
/// in the single-pass walk: each input character is inspected exactly once,
/// so entities produced for earlier characters are never re-escaped.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Total-function seam for callers holding optional text: `None` becomes `""`.
pub fn escape_html_opt(text: Option<&str>) -> String {
    text.map(escape_html).unwrap_or_default()
}
