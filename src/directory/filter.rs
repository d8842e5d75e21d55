//! Filtering and ordering of the business list.
//!
//! These are pure functions over a slice of records; results are vectors of
//! business ids (positions in that slice), so the records themselves are never
//! copied or reordered.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::BusinessRecord;
use crate::shaper::normalize_website_url;

/// Listing order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// A to Z, case-insensitive
    #[default]
    Name,
    /// Z to A
    NameDesc,
    /// By category, then by name
    Category,
    /// Highest rated first; unrated count as zero
    Rating,
}

/// Current filter selection. Empty strings and `false` mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search: String,
    /// Exact category, or empty for all.
    pub category: String,
    pub sort: SortOrder,
    pub halal: bool,
    pub rated: bool,
    pub has_website: bool,
    pub has_phone: bool,
    /// Substring of neighborhood or address.
    pub area: String,
}

impl FilterState {
    /// Whether any constraint (other than ordering) is active.
    pub fn is_filtering(&self) -> bool {
        !self.search.trim().is_empty()
            || !self.category.is_empty()
            || !self.area.trim().is_empty()
            || self.halal
            || self.rated
            || self.has_website
            || self.has_phone
    }
}

/// Lowercased, trimmed search terms prepared once per filter pass.
struct Terms {
    search: String,
    area: String,
}

impl Terms {
    fn new(state: &FilterState) -> Self {
        Self {
            search: state.search.trim().to_lowercase(),
            area: state.area.trim().to_lowercase(),
        }
    }
}

/// Case-insensitive substring test; `None` never matches.
pub(crate) fn contains_term(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(term))
}

fn matches_with(record: &BusinessRecord, state: &FilterState, terms: &Terms) -> bool {
    if !state.category.is_empty() && record.category() != state.category {
        return false;
    }

    if !terms.search.is_empty()
        && !record.search_fields().into_iter().any(|f| contains_term(f, &terms.search))
    {
        return false;
    }

    if !terms.area.is_empty()
        && !contains_term(Some(record.neighborhood()), &terms.area)
        && !contains_term(record.address.as_deref(), &terms.area)
    {
        return false;
    }

    if state.halal && record.halal != Some(true) {
        return false;
    }
    if state.rated && !record.rating.is_some_and(|r| r > 0.0) {
        return false;
    }
    if state.has_website
        && record
            .website
            .as_deref()
            .map(normalize_website_url)
            .is_none_or(|url| url.is_empty())
    {
        return false;
    }
    if state.has_phone
        && !record
            .phone
            .as_deref()
            .is_some_and(|p| p.chars().any(|c| c.is_ascii_digit()))
    {
        return false;
    }

    true
}

/// Whether a single record passes every active filter.
pub fn matches(record: &BusinessRecord, state: &FilterState) -> bool {
    matches_with(record, state, &Terms::new(state))
}

/// Ids of the records passing the filters, in input order.
pub fn filter_indices(businesses: &[BusinessRecord], state: &FilterState) -> Vec<usize> {
    let terms = Terms::new(state);
    businesses
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_with(record, state, &terms))
        .map(|(id, _)| id)
        .collect()
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn compare(a: &BusinessRecord, b: &BusinessRecord, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Name => compare_text(a.name(), b.name()),
        SortOrder::NameDesc => compare_text(b.name(), a.name()),
        SortOrder::Category => compare_text(a.category(), b.category())
            .then_with(|| compare_text(a.name(), b.name())),
        SortOrder::Rating => b.rating_or_zero().total_cmp(&a.rating_or_zero()),
    }
}

/// Stable in-place sort of ids by the given order.
pub fn sort(ids: &mut [usize], businesses: &[BusinessRecord], order: SortOrder) {
    ids.sort_by(|&a, &b| compare(&businesses[a], &businesses[b], order));
}

/// Filter then sort: the full ordered result list.
pub fn apply(businesses: &[BusinessRecord], state: &FilterState) -> Vec<usize> {
    let mut ids = filter_indices(businesses, state);
    sort(&mut ids, businesses, state.sort);
    ids
}
