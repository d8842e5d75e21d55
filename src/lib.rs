//! bizdir - local business directory generator and browser
//!
//! Turns a `businesses.json` dataset into a static directory site (one
//! SEO-ready HTML page per business plus `sitemap.xml`) and provides the
//! browsing engine behind the directory listing: filtering, sorting,
//! pagination, debounced search suggestions and persisted favorites.
//!
//! # Architecture Overview
//!
//! Generation is a straight pipeline:
//!
//! ```text
//! source ──► models::Dataset ──► slug ──► shaper::PageData ──► templating ──► generator
//!                                  └──────────────────────────► sitemap
//! ```
//!
//! The page generator and the sitemap builder both take their slugs from
//! [`slug::assign_slugs`], so every sitemap URL names a page that exists.
//!
//! Browsing works on the same records. [`directory::DirectoryController`] owns
//! the filter selection and the current page; the filtering, sorting and
//! slicing it does are plain functions in [`directory`].
//!
//! # Core Modules
//!
//! ## Generation
//! - [`source`] - Load the dataset from a file or an http(s) URL
//! - [`models`] - Business records and the dataset
//! - [`slug`] - URL slugs, unique across a dataset
//! - [`shaper`] - Per-page derived fields (meta description, JSON-LD, links)
//! - [`templating`] - Tera page rendering
//! - [`generator`] - Writes the pages and `GENERATION_SUMMARY.json`
//! - [`sitemap`] - `sitemap.xml`
//!
//! ## Browsing
//! - [`directory`] - Filters, sort orders, pagination, suggestions, debouncing
//! - [`favorites`] - Favorites and theme in a key/value store
//!
//! ## Supporting Modules
//! - [`cli`] - Command-line interface
//! - [`config`] - `bizdir.toml`
//! - [`constants`] - Defaults and limits shared across modules
//! - [`core`] - Error types and user-facing error reporting
//! - [`utils`] - Atomic file writes and progress bars
//!
//! # Dataset Format
//!
//! ```json
//! {
//!   "businesses": [
//!     {
//!       "name": "Patty King",
//!       "category": "FOOD & RESTAURANTS",
//!       "neighborhood": "Rexdale",
//!       "address": "1530 Albion Rd",
//!       "phone": "416-555-0100",
//!       "website": "pattyking.ca",
//!       "services": "Jamaican patties, catering",
//!       "rating": 4.5,
//!       "halal": true
//!     }
//!   ],
//!   "categories": ["FOOD & RESTAURANTS"]
//! }
//! ```
//!
//! Every field is optional. Missing names, categories and neighborhoods read
//! as "Unknown Business", "Services" and "Rexdale".

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod directory;
pub mod favorites;
pub mod generator;
pub mod models;
pub mod shaper;
pub mod sitemap;
pub mod slug;
pub mod source;
pub mod templating;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
