//! Utilities shared by the generator, the preference store and the CLI
//!
//! - [`fs`] - atomic writes and JSON file helpers
//! - [`progress`] - progress bars that respect `--no-progress`

pub mod fs;
pub mod progress;

pub use fs::{atomic_write, ensure_dir, read_json_file, safe_write, write_json_file};
pub use progress::ProgressBar;
