//! Search suggestions shown under the search box.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::constants::{SUGGESTION_LIMIT, SUGGESTION_MIN_CHARS};
use crate::models::BusinessRecord;

use super::filter::contains_term;

/// A suggested business for the current search term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub id: usize,
    pub name: String,
    pub category: String,
    /// HTML-escaped name with each match wrapped in `<strong>`.
    pub highlighted_name: String,
}

/// Up to [`SUGGESTION_LIMIT`] businesses whose name or category contains
/// `term`, in dataset order. Terms shorter than [`SUGGESTION_MIN_CHARS`]
/// (after trimming) produce nothing.
pub fn suggestions(businesses: &[BusinessRecord], term: &str) -> Vec<Suggestion> {
    let trimmed = term.trim();
    if trimmed.chars().count() < SUGGESTION_MIN_CHARS {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();
    let pattern = match_pattern(trimmed);

    businesses
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            contains_term(Some(record.name()), &needle)
                || contains_term(Some(record.category()), &needle)
        })
        .take(SUGGESTION_LIMIT)
        .map(|(id, record)| Suggestion {
            id,
            name: record.name().to_string(),
            category: record.category().to_string(),
            highlighted_name: highlight_with(record.name(), pattern.as_ref()),
        })
        .collect()
}

fn match_pattern(term: &str) -> Option<Regex> {
    if term.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}

fn highlight_with(text: &str, pattern: Option<&Regex>) -> String {
    let Some(pattern) = pattern else {
        return tera::escape_html(text);
    };

    let mut out = String::with_capacity(text.len() + 17);
    let mut last = 0;
    for found in pattern.find_iter(text) {
        out.push_str(&tera::escape_html(&text[last..found.start()]));
        out.push_str("<strong>");
        out.push_str(&tera::escape_html(found.as_str()));
        out.push_str("</strong>");
        last = found.end();
    }
    out.push_str(&tera::escape_html(&text[last..]));
    out
}

/// Escape `text` for HTML and wrap each case-insensitive occurrence of `term`
/// in `<strong>`.
///
/// ```
/// use bizdir_cli::directory::highlight_match;
///
/// assert_eq!(highlight_match("Patty King", "king"), "Patty <strong>King</strong>");
/// ```
pub fn highlight_match(text: &str, term: &str) -> String {
    highlight_with(text, match_pattern(term.trim()).as_ref())
}
