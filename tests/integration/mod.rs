//! Integration test suite for bizdir
//!
//! End-to-end tests that drive the compiled `bizdir` binary against the sample
//! dataset from `bizdir_cli::test_utils`.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: `pages`, `sitemap` and `build`
//! - **browse**: filtering, sorting, pagination and categories
//! - **suggest**: search suggestions, including debounced stdin input
//! - **preferences**: favorites and theme persistence
//! - **settings**: `init` and configuration loading errors
//!
//! Every command runs in its own temporary directory with progress bars and
//! colors disabled and an explicit `--store`, so tests never touch the user's
//! preferences.

use assert_cmd::Command;
use std::path::Path;

mod browse;
mod generate;
mod preferences;
mod settings;
mod suggest;

/// `bizdir` running in `dir` with deterministic output.
pub fn bizdir(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bizdir").unwrap();
    cmd.current_dir(dir)
        .env("BIZDIR_NO_PROGRESS", "1")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Parse a command's stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
