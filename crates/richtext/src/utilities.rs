//! Text normalization helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+").expect("valid leading whitespace pattern"));

static TRAILING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+$").expect("valid trailing whitespace pattern"));

/// Normalize a text node found in inline content.
///
/// Returns `None` for whitespace-only text. Otherwise the leading and the
/// trailing whitespace runs each collapse to a single space, and interior
/// whitespace is kept as-is, so text split across sibling nodes still joins
/// with one separating space.
pub fn normalize_fragment(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let leading = LEADING_WHITESPACE.replace(text, " ");
    Some(TRAILING_WHITESPACE.replace(&leading, " ").into_owned())
}
