//! Browse the directory from the terminal: filter, sort and page through the
//! businesses the same way the listing page does.
//!
//! ```bash
//! bizdir browse --category "FOOD & RESTAURANTS" --sort rating
//! bizdir browse --search dental --has-phone --page 2
//! bizdir browse --favorites-only --format json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::LISTING_SERVICES_EXCERPT;
use crate::directory::{DirectoryController, FilterState, PageLink, PaginationBar, SortOrder};
use crate::favorites::FavoritesStore;
use crate::models::{BusinessRecord, non_blank};
use crate::shaper::{normalize_website_url, truncate_text, website_domain};

use super::common::{OutputFormat, dataset_location, load_dataset, open_store};

/// Command to list businesses matching a set of filters.
#[derive(Args, Debug, Default)]
pub struct BrowseCommand {
    /// Dataset path or http(s) URL (overrides `[paths].data`)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Free-text search over name, category, address, services and notes
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact category name
    #[arg(long)]
    pub category: Option<String>,

    /// Result order
    #[arg(long, value_enum, default_value_t = SortOrder::Name)]
    pub sort: SortOrder,

    /// Only halal businesses
    #[arg(long)]
    pub halal: bool,

    /// Only businesses with a rating
    #[arg(long)]
    pub rated: bool,

    /// Only businesses with a usable website
    #[arg(long)]
    pub has_website: bool,

    /// Only businesses with a phone number
    #[arg(long)]
    pub has_phone: bool,

    /// Neighborhood or address substring
    #[arg(long)]
    pub area: Option<String>,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Businesses per page (overrides `[directory].page_size`)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Only businesses marked as favorites
    #[arg(long)]
    pub favorites_only: bool,

    /// Preference store file (overrides `[paths].store`)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ListingCard<'a> {
    id: usize,
    name: &'a str,
    category: &'a str,
    neighborhood: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    services: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    website: Option<String>,
    halal: bool,
    favorite: bool,
}

#[derive(Serialize)]
struct BrowseOutput<'a> {
    total: usize,
    page: usize,
    total_pages: usize,
    page_size: usize,
    filters: &'a FilterState,
    results: Vec<ListingCard<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationBar>,
}

impl BrowseCommand {
    fn filter_state(&self) -> FilterState {
        FilterState {
            search: self.search.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            sort: self.sort,
            halal: self.halal,
            rated: self.rated,
            has_website: self.has_website,
            has_phone: self.has_phone,
            area: self.area.clone().unwrap_or_default(),
        }
    }

    pub async fn execute(self, config: &Config) -> Result<()> {
        let dataset = load_dataset(dataset_location(self.data.as_deref(), config)).await?;
        let page_size = self.page_size.unwrap_or(config.directory.page_size);
        let mut controller = DirectoryController::with_page_size(dataset.businesses, page_size)
            .with_categories(dataset.categories);

        let favorites = if self.favorites_only || self.store.is_some() {
            Some(FavoritesStore::new(open_store(self.store.as_deref(), config)?))
        } else {
            None
        };

        let state = self.filter_state();
        if !state.category.is_empty() && !controller.has_category(&state.category) {
            let hint = controller
                .suggest_category(&state.category)
                .map(|c| format!(" Did you mean '{c}'?"))
                .unwrap_or_default();
            eprintln!("{} No businesses in category '{}'.{}", "⚠".yellow(), state.category, hint);
        }
        controller.set_state(state);

        if self.favorites_only {
            let ids = favorites.as_ref().map(|f| f.all().to_vec()).unwrap_or_default();
            controller.restrict_to(Some(ids));
        }

        if self.page != 1 && !controller.set_page(self.page) {
            eprintln!(
                "{} Page {} is out of range (1-{}); showing page 1",
                "⚠".yellow(),
                self.page,
                controller.total_pages().max(1)
            );
        }

        let is_favorite = |id: usize| favorites.as_ref().is_some_and(|f| f.is_favorite(id));
        let cards: Vec<ListingCard<'_>> = controller
            .current_page_items()
            .map(|(id, record)| card(id, record, is_favorite(id)))
            .collect();

        match self.format {
            OutputFormat::Json => {
                let output = BrowseOutput {
                    total: controller.result_count(),
                    page: controller.current_page(),
                    total_pages: controller.total_pages(),
                    page_size: controller.page_size(),
                    filters: controller.state(),
                    results: cards,
                    pagination: controller.pagination_bar(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => print_text(&controller, &cards),
        }
        Ok(())
    }
}

fn card(id: usize, record: &BusinessRecord, favorite: bool) -> ListingCard<'_> {
    ListingCard {
        id,
        name: record.name(),
        category: record.category(),
        neighborhood: record.neighborhood(),
        rating: record.rating.filter(|r| *r > 0.0),
        services: non_blank(record.services.as_deref())
            .map(|s| truncate_text(s, LISTING_SERVICES_EXCERPT)),
        phone: non_blank(record.phone.as_deref()),
        website: record
            .website
            .as_deref()
            .map(normalize_website_url)
            .filter(|url| !url.is_empty()),
        halal: record.halal == Some(true),
        favorite,
    }
}

fn print_text(controller: &DirectoryController, cards: &[ListingCard<'_>]) {
    let total = controller.result_count();
    if total == 0 {
        println!("No businesses found.");
        if controller.state().is_filtering() {
            println!("Try adjusting your search or filters.");
        }
        return;
    }

    let first = (controller.current_page() - 1) * controller.page_size() + 1;
    let last = first + cards.len() - 1;
    println!(
        "{}",
        format!("Showing {first}-{last} of {total} businesses").bold()
    );
    println!();

    for card in cards {
        let mut title = format!("[{}] {}", card.id, card.name.bold());
        if card.favorite {
            title.push_str(&format!(" {}", "♥".red()));
        }
        if let Some(rating) = card.rating {
            title.push_str(&format!(" {}", format!("★ {rating:.1}").yellow()));
        }
        if card.halal {
            title.push_str(&format!(" {}", "halal".green()));
        }
        println!("{title}");
        println!("    {} · {}", card.category.cyan(), card.neighborhood);
        if let Some(services) = &card.services {
            println!("    {services}");
        }
        let contact: Vec<String> = card
            .phone
            .map(str::to_string)
            .into_iter()
            .chain(card.website.as_deref().map(website_domain))
            .collect();
        if !contact.is_empty() {
            println!("    {}", contact.join(" · ").dimmed());
        }
    }

    if let Some(bar) = controller.pagination_bar() {
        println!();
        println!("{}", render_bar(&bar));
    }
}

fn render_bar(bar: &PaginationBar) -> String {
    let mut parts = Vec::with_capacity(bar.links.len() + 2);
    if bar.has_prev {
        parts.push("‹ prev".to_string());
    }
    for link in &bar.links {
        parts.push(match link {
            PageLink::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        });
    }
    if bar.has_next {
        parts.push("next ›".to_string());
    }
    parts.join("  ")
}
