//! HTML escaping for operator-supplied banner content
//!
//! Banner text lands on a public page, so every field from the operator is
//! treated as untrusted and escaped before it reaches a template.

/// Escape a string for HTML text and double- or single-quoted attributes
///
/// Escapes: ampersand, angle brackets, double and single quotes
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
