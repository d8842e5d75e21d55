//! The browsing engine behind the directory listing.
//!
//! - [`filter`]: the filter predicate and sort orders, as pure functions over
//!   a slice of records
//! - [`pagination`]: page slicing and the pagination bar
//! - [`suggestions`]: search-box suggestions and match highlighting
//! - [`debounce`] / [`search`]: keystroke debouncing on the tokio runtime
//! - [`controller`]: the [`DirectoryController`] that ties them together
//!
//! Businesses are identified by their position in the loaded dataset; every
//! result list in this module is a list of such ids.
//!
//! # Example
//!
//! ```
//! use bizdir_cli::directory::DirectoryController;
//! use bizdir_cli::models::BusinessRecord;
//!
//! let mut controller = DirectoryController::new(vec![
//!     BusinessRecord::named("Patty King", "Rexdale"),
//!     BusinessRecord::named("Kipling Dental", "Kingsview Village"),
//! ]);
//! controller.set_search("dental");
//! assert_eq!(controller.filtered_ids(), &[1]);
//! ```

pub mod controller;
pub mod debounce;
pub mod filter;
pub mod pagination;
pub mod search;
pub mod suggestions;

pub use controller::{CategoryCount, DirectoryController};
pub use debounce::Debouncer;
pub use filter::{FilterState, SortOrder};
pub use pagination::{PageLink, PaginationBar};
pub use search::{SearchBox, SearchUpdate};
pub use suggestions::{Suggestion, highlight_match, suggestions};
