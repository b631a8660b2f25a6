//! LaTeX special character escaping
//!
//! Raw fields coming out of a delimited file are plain text; before they can
//! be placed in a LaTeX table body, the characters LaTeX reserves for its own
//! syntax have to be escaped. The escaper makes a single left-to-right pass:
//! each special character is replaced exactly once and the replacement is
//! never re-scanned, so already-escaped output stays stable.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Mapping of LaTeX special characters to their escaped forms
    static ref LATEX_SPECIALS: HashMap<char, &'static str> = {
        let mut m = HashMap::new();
        m.insert('&', r"\&");
        m.insert('%', r"\%");
        m.insert('$', r"\$");
        m.insert('#', r"\#");
        m.insert('_', r"\_");
        m.insert('{', r"\{");
        m.insert('}', r"\}");
        m.insert('~', r"\textasciitilde{}");
        m.insert('^', r"\textasciicircum{}");
        m.insert('\\', r"\textbackslash{}");
        m
    };
}

/// Escape the LaTeX special characters `& % $ # _ { } ~ ^ \` in a field.
///
/// A field with none of these characters is returned unchanged.
///
/// ```rust
/// use textab::escape::escape_field;
///
/// assert_eq!(escape_field("50% & $5"), r"50\% \& \$5");
/// assert_eq!(escape_field("plain"), "plain");
/// ```
pub fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match LATEX_SPECIALS.get(&c) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(c),
        }
    }
    out
}

/// Escape every field of a row. Used by the row formatter when escaping is
/// enabled; when it is disabled fields pass through verbatim.
pub fn escape_row(fields: &[String]) -> Vec<String> {
    fields.iter().map(|f| escape_field(f)).collect()
}
