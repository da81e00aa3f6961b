//! Utility functions for docfmt

use regex::Regex;
use std::sync::LazyLock;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").expect("entity pattern compiles")
});

/// Escapes HTML special characters.
///
/// Used for raw text that never went through markdown, such as example
/// source loaded from disk.
///
/// # Arguments
///
/// * `text`: Plain text to escape
///
/// # Returns
///
/// HTML safe string
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes HTML special characters, leaving existing entities intact.
///
/// Anchor and alt text usually arrive from rendered markdown where quotes
/// and ampersands are already entities. Those pass through unchanged while
/// raw `<`, `>`, quotes and bare `&` are still escaped.
///
/// # Arguments
///
/// * `text`: Text that may already contain entities
///
/// # Returns
///
/// HTML safe string
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        match ch {
            '&' if ENTITY.is_match(&text[idx..]) => out.push('&'),
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

/// Returns the first `count` characters of `text`.
///
/// Slices on a char boundary so multibyte text never panics.
pub fn take_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
