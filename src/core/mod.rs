//! Core types and functionality for bizdir
//!
//! This module holds the error system shared by every command:
//! - [`DirectoryError`] - strongly-typed failures callers can match on
//! - [`ErrorContext`] - user-facing wrapper with suggestion and details
//! - [`user_friendly_error`] - converts any `anyhow::Error` for CLI display
//!
//! Commands return `anyhow::Result` and attach context with `.context()`;
//! `main` turns the final error into an [`ErrorContext`] and exits with status 1.

pub mod error;

pub use error::{DirectoryError, ErrorContext, user_friendly_error};
