//! Case-insensitive matching and year extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Exactly four ASCII digits with no digit on either side.
#[allow(clippy::expect_used)]
static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]{4})(?:[^0-9]|$)").expect("year pattern is valid")
});

/// Trim and lowercase a user query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// True if `needle` occurs in `haystack`, ignoring case. An empty needle
/// always matches.
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Like [`contains_case_insensitive`], for a needle already lowercased by
/// [`normalize_query`].
pub(crate) fn contains_normalized(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// The first standalone four-digit run in `s`, parsed as a year.
///
/// ```
/// use setlist_search::text::extract_year;
///
/// assert_eq!(extract_year("In 1999 we started"), Some(1999));
/// assert_eq!(extract_year("Live at 1999-2000"), Some(1999));
/// assert_eq!(extract_year("19990"), None);
/// ```
pub fn extract_year(s: &str) -> Option<i64> {
    YEAR_PATTERN
        .captures(s)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
