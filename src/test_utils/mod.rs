//! Test utilities for bizdir
//!
//! Shared fixtures for unit and integration tests: a small sample dataset that
//! exercises every filter, helpers to write it to disk, and once-only logging
//! setup.
//!
//! # Example
//!
//! ```rust,no_run
//! use bizdir_cli::test_utils::{init_test_logging, write_sample_dataset};
//!
//! init_test_logging(None);
//! let temp = tempfile::tempdir().unwrap();
//! let path = write_sample_dataset(temp.path());
//! assert!(path.exists());
//! ```

pub mod fixtures;

pub use fixtures::{
    sample_businesses, sample_dataset_json, sample_workspace, write_dataset, write_sample_dataset,
};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG` when set; with neither,
/// logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
