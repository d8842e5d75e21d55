//! Listing state for one browsing session.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::models::BusinessRecord;

use super::filter::{self, FilterState, SortOrder};
use super::pagination::{self, PaginationBar};
use super::search::SearchBox;

/// Number of businesses in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Owns the filter selection, the filtered and sorted result list, and the
/// current page.
///
/// Every filter mutation recomputes the result list and returns to page 1.
/// Page changes only move the window over the existing result list.
pub struct DirectoryController {
    businesses: Arc<Vec<BusinessRecord>>,
    /// Declared category order from the dataset.
    categories: Vec<String>,
    state: FilterState,
    /// Restricts results to these ids when set (favorites view).
    allowed: Option<HashSet<usize>>,
    filtered: Vec<usize>,
    current_page: usize,
    page_size: usize,
}

impl DirectoryController {
    pub fn new(businesses: Vec<BusinessRecord>) -> Self {
        Self::with_page_size(businesses, DEFAULT_PAGE_SIZE)
    }

    /// A page size of zero is treated as one.
    pub fn with_page_size(businesses: Vec<BusinessRecord>, page_size: usize) -> Self {
        let mut controller = Self {
            businesses: Arc::new(businesses),
            categories: Vec::new(),
            state: FilterState::default(),
            allowed: None,
            filtered: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
        };
        controller.refresh();
        controller
    }

    /// Use `categories` as the declared category order.
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn businesses(&self) -> &[BusinessRecord] {
        &self.businesses
    }

    pub fn business(&self, id: usize) -> Option<&BusinessRecord> {
        self.businesses.get(id)
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    fn refresh(&mut self) {
        let mut ids = filter::filter_indices(&self.businesses, &self.state);
        if let Some(allowed) = &self.allowed {
            ids.retain(|id| allowed.contains(id));
        }
        filter::sort(&mut ids, &self.businesses, self.state.sort);
        tracing::debug!(
            "{} of {} businesses match the current filters",
            ids.len(),
            self.businesses.len()
        );
        self.filtered = ids;
        self.current_page = 1;
    }

    /// Replace the whole selection at once.
    pub fn set_state(&mut self, state: FilterState) {
        self.state = state;
        self.refresh();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
        self.refresh();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.state.category = category.into();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.state.sort = sort;
        self.refresh();
    }

    pub fn set_area(&mut self, area: impl Into<String>) {
        self.state.area = area.into();
        self.refresh();
    }

    pub fn set_halal(&mut self, on: bool) {
        self.state.halal = on;
        self.refresh();
    }

    pub fn set_rated(&mut self, on: bool) {
        self.state.rated = on;
        self.refresh();
    }

    pub fn set_has_website(&mut self, on: bool) {
        self.state.has_website = on;
        self.refresh();
    }

    pub fn set_has_phone(&mut self, on: bool) {
        self.state.has_phone = on;
        self.refresh();
    }

    /// Limit results to `ids`, or lift the limit with `None`.
    pub fn restrict_to(&mut self, ids: Option<impl IntoIterator<Item = usize>>) {
        self.allowed = ids.map(|ids| ids.into_iter().collect());
        self.refresh();
    }

    /// Reset every filter and the sort order.
    pub fn clear_filters(&mut self) {
        self.set_state(FilterState::default());
    }

    /// Ordered ids of every matching business.
    pub fn filtered_ids(&self) -> &[usize] {
        &self.filtered
    }

    pub fn result_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size)
    }

    /// Move to `page`. Returns `false`, leaving the page unchanged, when
    /// `page` is out of range.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            tracing::debug!("Ignoring out-of-range page {}", page);
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_sub(1))
    }

    /// Ids shown on the current page.
    pub fn current_page_ids(&self) -> &[usize] {
        pagination::page(&self.filtered, self.current_page, self.page_size)
    }

    /// `(id, record)` pairs shown on the current page.
    pub fn current_page_items(&self) -> impl Iterator<Item = (usize, &BusinessRecord)> {
        self.current_page_ids()
            .iter()
            .map(|&id| (id, &self.businesses[id]))
    }

    pub fn pagination_bar(&self) -> Option<PaginationBar> {
        pagination::pagination_bar(self.current_page, self.total_pages())
    }

    /// Business count per category over the whole dataset.
    pub fn category_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for record in self.businesses.iter() {
            *counts.entry(record.category()).or_insert(0) += 1;
        }
        counts
    }

    /// Declared categories with at least one business, in declared order.
    /// Categories used by records but missing from the declared list follow
    /// in first-seen order.
    fn listed_categories(&self) -> Vec<CategoryCount> {
        let counts = self.category_counts();
        let mut seen = HashSet::new();
        let undeclared = self.businesses.iter().map(|r| r.category());
        self.categories
            .iter()
            .map(String::as_str)
            .chain(undeclared)
            .filter(|name| seen.insert(*name))
            .filter_map(|name| {
                counts.get(name).map(|&count| CategoryCount {
                    name: name.to_string(),
                    count,
                })
            })
            .collect()
    }

    /// Categories by descending count, ties in declared order (category grid).
    pub fn categories_by_count(&self) -> Vec<CategoryCount> {
        let mut list = self.listed_categories();
        list.sort_by(|a, b| b.count.cmp(&a.count));
        list
    }

    /// Categories alphabetically (category filter options).
    pub fn category_options(&self) -> Vec<CategoryCount> {
        let mut list = self.listed_categories();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// Closest known category to an unknown `name`, if any is near enough.
    pub fn suggest_category(&self, name: &str) -> Option<String> {
        let wanted = name.to_lowercase();
        let max_distance = (wanted.chars().count() / 2).max(1);
        self.listed_categories()
            .into_iter()
            .map(|c| (strsim::levenshtein(&wanted, &c.name.to_lowercase()), c.name))
            .filter(|(distance, _)| *distance <= max_distance)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, category)| category)
    }

    /// Whether `name` is a category with at least one business.
    pub fn has_category(&self, name: &str) -> bool {
        self.businesses.iter().any(|r| r.category() == name)
    }

    /// Debounced search box over the same dataset.
    pub fn search_box(&self) -> SearchBox {
        SearchBox::new(Arc::clone(&self.businesses))
    }
}
