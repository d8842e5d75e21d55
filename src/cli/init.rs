//! Write a starter `bizdir.toml`.
//!
//! ```bash
//! bizdir init
//! bizdir init --path ./site --force
//! ```
//!
//! The generated file lists every setting with its default value, so deleting
//! a line never changes behavior.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::CONFIG_FILE;
use crate::utils::fs::{ensure_dir, safe_write};

/// Command to create a configuration file.
#[derive(Args, Debug, Default)]
pub struct InitCommand {
    /// Directory to create the config in (defaults to the current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing bizdir.toml
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub async fn execute(self) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let config_path = target_dir.join(CONFIG_FILE);

        if config_path.exists() && !self.force {
            return Err(anyhow!(
                "{} already exists at {}. Use --force to overwrite",
                CONFIG_FILE,
                config_path.display()
            ));
        }

        ensure_dir(&target_dir)?;
        safe_write(&config_path, &Config::init_template())?;

        println!("{} Initialized {}", "✓".green(), config_path.display());
        println!("\n{}", "Next steps:".cyan());
        println!("  Point {} at your businesses.json, then run:", "[paths].data".bright_white());
        println!("    bizdir build");
        Ok(())
    }
}
