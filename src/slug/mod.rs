//! URL slugs for business pages.
//!
//! A slug is derived from `"{name}-{neighborhood}"` and made unique within one
//! build by appending `-1`, `-2`, ... in input order. The page generator and the
//! sitemap builder both go through [`assign_slugs`], so a page and its sitemap
//! entry can never disagree for the same ordered dataset.
//!
//! ```
//! use bizdir_cli::models::BusinessRecord;
//! use bizdir_cli::slug::assign_slugs;
//!
//! let records = vec![
//!     BusinessRecord::named("A Cafe", "Rexdale"),
//!     BusinessRecord::named("A Cafe", "Rexdale"),
//! ];
//! assert_eq!(assign_slugs(&records), vec!["a-cafe-rexdale", "a-cafe-rexdale-1"]);
//! ```

use std::collections::{HashMap, HashSet};

use crate::models::BusinessRecord;

/// Slug used when name and neighborhood contribute no slug characters at all.
pub const EMPTY_SLUG_FALLBACK: &str = "business";

/// Base slug for a name and neighborhood.
///
/// Lowercases, drops everything except ASCII word characters, whitespace and
/// hyphens, turns whitespace runs into a single hyphen and collapses repeated
/// hyphens. The result never starts or ends with a hyphen.
pub fn slug(name: &str, neighborhood: &str) -> String {
    slugify(&format!("{name}-{neighborhood}"))
}

/// Slugify arbitrary text with the same rules as [`slug`].
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        match c {
            '-' if out.is_empty() || out.ends_with('-') => {}
            '-' | '_' => out.push(c),
            c if c.is_ascii_alphanumeric() => out.push(c),
            _ => {}
        }
    }
    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        EMPTY_SLUG_FALLBACK.to_string()
    } else {
        out
    }
}

/// Hands out collision-free slugs for one generation run.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    counters: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `base` the first time it is requested, then `base-1`, `base-2`, ...
    ///
    /// A suffixed candidate that collides with a slug already handed out (for
    /// example a business literally named "A Cafe 1") is skipped.
    pub fn unique_slug(&mut self, base: &str) -> String {
        if !self.counters.contains_key(base) && self.issued.insert(base.to_string()) {
            self.counters.insert(base.to_string(), 1);
            return base.to_string();
        }

        let counter = self.counters.entry(base.to_string()).or_insert(1);
        loop {
            let candidate = format!("{base}-{counter}");
            *counter += 1;
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Number of slugs handed out so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

/// Final slug for every record, in input order, from a fresh registry.
pub fn assign_slugs(records: &[BusinessRecord]) -> Vec<String> {
    let mut registry = SlugRegistry::new();
    records
        .iter()
        .map(|record| registry.unique_slug(&slug(record.name(), record.neighborhood())))
        .collect()
}
