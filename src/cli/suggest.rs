//! Search suggestions, as shown under the search box.
//!
//! With a term, prints the suggestions for it. Without one, reads keystrokes
//! from stdin (one line per state of the search box) and prints suggestions
//! each time input pauses for 300 ms:
//!
//! ```bash
//! bizdir suggest pizza
//! printf 'p\npi\npiz\n' | bizdir suggest
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::constants::SUGGESTION_MIN_CHARS;
use crate::directory::{DirectoryController, SearchBox, SearchUpdate, Suggestion, suggestions};

use super::common::{OutputFormat, dataset_location, load_dataset};

/// Command to print search suggestions.
#[derive(Args, Debug, Default)]
pub struct SuggestCommand {
    /// Search term; omit to read keystrokes from stdin
    pub term: Option<String>,

    /// Dataset path or http(s) URL (overrides `[paths].data`)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SuggestCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let dataset = load_dataset(dataset_location(self.data.as_deref(), config)).await?;
        let controller = DirectoryController::new(dataset.businesses);

        match self.term {
            Some(term) => {
                let found = suggestions(controller.businesses(), &term);
                print_update(&SearchUpdate { term, suggestions: found }, self.format)
            }
            None => read_keystrokes(controller.search_box(), self.format).await,
        }
    }
}

async fn read_keystrokes(mut search: SearchBox, format: OutputFormat) -> Result<()> {
    let mut rx = search.subscribe();
    let printer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let update = rx.borrow_and_update().clone();
            if let Err(e) = print_update(&update, format) {
                tracing::error!("Failed to print suggestions: {}", e);
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        search.input(line);
    }

    search.settle().await;
    // Closing the channel ends the printer once it has seen the last update.
    drop(search);
    printer.await?;
    Ok(())
}

fn print_update(update: &SearchUpdate, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(update)?),
        OutputFormat::Text => print_text(&update.term, &update.suggestions),
    }
    Ok(())
}

fn print_text(term: &str, found: &[Suggestion]) {
    if term.trim().chars().count() < SUGGESTION_MIN_CHARS {
        println!(
            "{}",
            format!("Type at least {SUGGESTION_MIN_CHARS} characters for suggestions").dimmed()
        );
        return;
    }
    if found.is_empty() {
        println!("No suggestions for '{}'", term.trim());
        return;
    }
    println!("Suggestions for '{}':", term.trim().bold());
    for suggestion in found {
        println!(
            "  [{}] {} {}",
            suggestion.id,
            suggestion.name,
            format!("({})", suggestion.category).dimmed()
        );
    }
}
