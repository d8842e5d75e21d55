//! Error handling for bizdir
//!
//! This module provides the typed error enum used across the generator and the
//! browsing engine, plus the user-facing reporting layer the CLI prints on exit.
//! The error system follows two rules:
//! 1. **Strongly-typed errors** for the failures callers branch on
//! 2. **User-friendly messages** with an actionable suggestion for CLI users
//!
//! # Architecture
//!
//! - [`DirectoryError`] - Enumerated failure cases
//! - [`ErrorContext`] - Wrapper that adds a suggestion and details for display
//!
//! Per-record generation failures are *not* surfaced through this path: the
//! page generator catches them, logs them and records them in the summary.
//! Only failures that stop a whole command end up in [`user_friendly_error`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use bizdir_cli::core::{DirectoryError, user_friendly_error};
//!
//! let error = DirectoryError::DatasetNotFound {
//!     path: "data/businesses.json".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for bizdir operations.
///
/// Variants carry plain strings so the enum stays cheap to clone when it is
/// re-wrapped into an [`ErrorContext`].
#[derive(Error, Debug, Clone)]
pub enum DirectoryError {
    /// The dataset file does not exist.
    #[error("Dataset not found: {path}")]
    DatasetNotFound {
        /// Path that was looked up
        path: String,
    },

    /// Fetching the dataset over the network failed.
    #[error("Error loading data from {location}")]
    DatasetFetchFailed {
        /// URL of the dataset
        location: String,
        /// Transport or status failure
        reason: String,
    },

    /// The dataset was read but is not a `{ businesses, categories }` document.
    #[error("Invalid dataset in {location}: {reason}")]
    DatasetParseError {
        /// Path or URL of the dataset
        location: String,
        /// Parser message
        reason: String,
    },

    /// An explicitly requested configuration file is missing.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Requested path
        path: String,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// Configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// Rendering a business page template failed.
    #[error("Failed to render page for '{name}': {reason}")]
    TemplateRender {
        /// Business name
        name: String,
        /// Tera error message
        reason: String,
    },

    /// A business id does not address any loaded business.
    #[error("Business id {id} is out of range (dataset has {total} businesses)")]
    BusinessNotFound {
        /// Requested id
        id: usize,
        /// Number of loaded businesses
        total: usize,
    },

    /// Reading or writing the persisted preference store failed.
    #[error("Preference storage error at {path}: {reason}")]
    StorageError {
        /// Store file
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// An unknown theme name was supplied.
    #[error("Unknown theme '{name}'")]
    InvalidTheme {
        /// The rejected value
        name: String,
    },

    /// A filesystem operation failed.
    #[error("File system error: {operation}")]
    FileSystemError {
        /// What was being done
        operation: String,
        /// Path involved
        path: String,
    },

    /// Insufficient permissions for a filesystem operation.
    #[error("Permission denied: {operation}")]
    PermissionDenied {
        /// What was being done
        operation: String,
        /// Path involved
        path: String,
    },

    /// Catch-all carrying a pre-formatted message.
    #[error("{message}")]
    Other {
        /// Message to display
        message: String,
    },
}

/// Error context wrapper that adds a suggestion and details to a [`DirectoryError`].
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DirectoryError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DirectoryError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions.
///
/// Recognizes [`DirectoryError`] anywhere in the chain, [`std::io::Error`] kinds
/// and TOML parse failures; everything else is shown with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(dir_error) = error.chain().find_map(|e| e.downcast_ref::<DirectoryError>()) {
        return create_error_context(dir_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DirectoryError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check ownership and permissions of the output directory")
                .with_details("bizdir could not read or write one of its files");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DirectoryError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details("A required file or directory could not be found");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(DirectoryError::ConfigParseError {
            file: crate::constants::CONFIG_FILE.to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your bizdir.toml file")
        .with_details(toml_error.to_string());
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DirectoryError::Other {
        message,
    })
}

fn create_error_context(error: DirectoryError) -> ErrorContext {
    match &error {
        DirectoryError::DatasetNotFound { path } => ErrorContext::new(error.clone())
            .with_suggestion("Pass --data <path> or set [paths].data in bizdir.toml")
            .with_details(format!("No dataset file exists at {path}")),

        DirectoryError::DatasetFetchFailed { reason, .. } => ErrorContext::new(error.clone())
            .with_suggestion("Please try again; check the URL and your network connection")
            .with_details(reason.clone()),

        DirectoryError::DatasetParseError { .. } => ErrorContext::new(error.clone())
            .with_suggestion(
                "The dataset must be a JSON object of the form { \"businesses\": [...], \"categories\": [...] }",
            ),

        DirectoryError::ConfigNotFound { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Run 'bizdir init' to create a bizdir.toml, or drop --config to use defaults"),

        DirectoryError::ConfigParseError { file, reason } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Check the TOML syntax in {file}. Common issues: missing quotes, unmatched brackets"
            ))
            .with_details(reason.clone()),

        DirectoryError::BusinessNotFound { total, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Business ids are dataset positions from 0 to {}; 'bizdir browse --format json' lists them",
                total.saturating_sub(1)
            )),

        DirectoryError::StorageError { path, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Check that {path} is writable, or point --store elsewhere")),

        DirectoryError::InvalidTheme { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Use one of: light, dark, system"),

        DirectoryError::PermissionDenied { operation, path } => ErrorContext::new(error.clone())
            .with_suggestion(match cfg!(windows) {
                true => "Run as Administrator or check file permissions in File Explorer",
                false => "Check file permissions with 'ls -la'",
            })
            .with_details(format!("Cannot {operation} due to insufficient permissions on {path}")),

        _ => ErrorContext::new(error.clone()),
    }
}
