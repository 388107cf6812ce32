//! Small text helpers shared by the catalog and checkout.

use once_cell::sync::Lazy;
use regex::Regex;

// Literal pattern, checked by the tests below.
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Default length used by [`truncate_text`].
pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;

/// Converts text into a URL slug: lowercase words joined by single hyphens.
///
/// Characters other than alphanumerics, whitespace, `_` and `-` are dropped.
pub fn slugify(text: &str) -> String {
    let cleaned: String = text
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .collect();

    cleaned
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Shortens text to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim_end())
}

/// Loose email shape check: something, `@`, something, `.`, something,
/// with no whitespace inside those runs. The match is unanchored.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
