//! Global constants used throughout the bizdir codebase.
//!
//! Field defaults, listing limits and timing values that more than one module
//! depends on live here so the generator and the browsing engine can never
//! disagree about them.

use std::time::Duration;

/// Name used when a business record has no `name`.
///
/// Both the page generator and the sitemap builder derive slugs from this
/// value, so it must stay identical across them.
pub const DEFAULT_BUSINESS_NAME: &str = "Unknown Business";

/// Category used when a business record has no `category`.
pub const DEFAULT_CATEGORY: &str = "Services";

/// Neighborhood used when a business record has no `neighborhood`.
pub const DEFAULT_NEIGHBORHOOD: &str = "Rexdale";

/// Hard length budget (in characters) of a page meta description, suffix included.
pub const META_DESCRIPTION_BUDGET: usize = 155;

/// Suffix appended to a truncated meta description or listing excerpt.
pub const ELLIPSIS: &str = "...";

/// Number of businesses shown per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Maximum number of numbered links in the pagination bar.
pub const PAGINATION_WINDOW: usize = 5;

/// Maximum number of search suggestions returned for a term.
pub const SUGGESTION_LIMIT: usize = 6;

/// Minimum trimmed search term length before suggestions are computed.
pub const SUGGESTION_MIN_CHARS: usize = 2;

/// Delay after the last keystroke before suggestions are recomputed.
pub fn search_debounce_delay() -> Duration {
    Duration::from_millis(300)
}

/// Number of categories shown in the category grid before "show all".
pub const INITIAL_CATEGORY_COUNT: usize = 15;

/// Length of the services excerpt on a listing card.
pub const LISTING_SERVICES_EXCERPT: usize = 80;

/// Generation progress is logged every this many records.
pub const PROGRESS_LOG_INTERVAL: usize = 100;

/// Directory (relative to the output root) that receives business pages.
pub const BUSINESSES_DIR: &str = "businesses";

/// File name of the generation summary written next to the business pages.
pub const GENERATION_SUMMARY_FILE: &str = "GENERATION_SUMMARY.json";

/// File name of the emitted sitemap.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Default configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "bizdir.toml";

/// Storage key holding the favorites id list.
pub const FAVORITES_KEY: &str = "favorites";

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Environment variable that disables progress bars when set.
pub const NO_PROGRESS_ENV: &str = "BIZDIR_NO_PROGRESS";
