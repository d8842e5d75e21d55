//! Show or set the color theme preference.
//!
//! ```bash
//! bizdir theme          # prints the current preference
//! bizdir theme dark
//! bizdir theme system   # forget the preference and follow the OS
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::favorites::{ThemePreference, ThemeStore};

use super::common::open_store;

/// Command to read or change the theme.
#[derive(Args, Debug, Default)]
pub struct ThemeCommand {
    /// New theme; omit to print the current one
    #[arg(value_enum)]
    pub theme: Option<ThemePreference>,

    /// Preference store file (overrides `[paths].store`)
    #[arg(long)]
    pub store: Option<PathBuf>,
}

impl ThemeCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let mut themes = ThemeStore::new(open_store(self.store.as_deref(), config)?);

        match self.theme {
            Some(theme) => {
                themes.set(theme)?;
                println!("{} Theme set to {}", "✓".green(), theme.to_string().bold());
            }
            None => println!("{}", themes.get()),
        }
        Ok(())
    }
}
