//! Security response headers and CSP assembly.
//!
//! # Responsibilities
//! - Provide the standard hardening header set as name/value pairs
//! - Assemble Content-Security-Policy values from per-directive sources
//! - Generate nonces for inline scripts the policy allows by nonce
//!
//! # Design Decisions
//! - The toolkit produces header values only; attaching them to responses
//!   or `<meta>` tags is the hosting layer's job
//! - Directive order in a built CSP is insertion order, so output is
//!   deterministic and diffable

use rand::Rng;

/// The hardening header set. `Default` gives the standard trio without a
/// CSP; add one with [`SecurityHeaders::with_csp`].
#[derive(Debug, Clone, Default)]
pub struct SecurityHeaders {
    csp: Option<String>,
}

impl SecurityHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include a `Content-Security-Policy` header with the given value.
    pub fn with_csp(value: impl Into<String>) -> Self {
        Self {
            csp: Some(value.into()),
        }
    }

    /// Header name/value pairs in a fixed order, ready to attach.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("X-Content-Type-Options", "nosniff".to_string()),
            ("X-Frame-Options", "DENY".to_string()),
            ("X-XSS-Protection", "1; mode=block".to_string()),
        ];
        if let Some(csp) = &self.csp {
            pairs.push(("Content-Security-Policy", csp.clone()));
        }
        pairs
    }
}

/// Builder for `Content-Security-Policy` values.
///
/// Repeating a directive name extends its source list rather than emitting
/// the directive twice.
#[derive(Debug, Clone, Default)]
pub struct CspBuilder {
    directives: Vec<(String, Vec<String>)>,
}

impl CspBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add sources to a directive, e.g. `.directive("script-src", &["'self'"])`.
    pub fn directive(mut self, name: &str, sources: &[&str]) -> Self {
        let sources_owned = sources.iter().map(|s| s.to_string());
        if let Some((_, existing)) = self.directives.iter_mut().find(|(n, _)| n == name) {
            existing.extend(sources_owned);
        } else {
            self.directives.push((name.to_string(), sources_owned.collect()));
        }
        self
    }

    /// Render the policy value: `name src src; name src`.
    pub fn build(self) -> String {
        self.directives
            .iter()
            .map(|(name, sources)| {
                if sources.is_empty() {
                    name.clone()
                } else {
                    format!("{} {}", name, sources.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Generate a 16-byte nonce as 32 lowercase hex characters, for
/// `'nonce-…'` CSP sources on inline scripts.
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill(&mut bytes[..]);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
