//! Business page rendering with Tera.
//!
//! The page template is compiled into the binary and registered under an
//! `.html` name, which turns on Tera's HTML autoescaping for every value that is
//! not explicitly marked `| safe`. Only the pre-serialized JSON-LD blocks are.

pub mod filters;

use chrono::Datelike;
use tera::{Context as TeraContext, Tera};

use crate::core::DirectoryError;
use crate::shaper::PageData;

/// Template name; the `.html` suffix enables autoescaping.
pub const BUSINESS_PAGE_TEMPLATE: &str = "business_page.html";

const BUSINESS_PAGE_SOURCE: &str = include_str!("business_page.html");

/// Renders [`PageData`] into a complete HTML document.
pub struct PageRenderer {
    tera: Tera,
    year: i32,
}

impl PageRenderer {
    /// Renderer using the built-in business page template.
    pub fn new() -> Result<Self, DirectoryError> {
        Self::with_template(BUSINESS_PAGE_SOURCE)
    }

    /// Renderer using a custom template source.
    pub fn with_template(source: &str) -> Result<Self, DirectoryError> {
        let mut tera = Tera::default();
        tera.register_filter("stars", filters::create_stars_filter());
        tera.add_raw_template(BUSINESS_PAGE_TEMPLATE, source).map_err(|e| {
            DirectoryError::TemplateRender {
                name: BUSINESS_PAGE_TEMPLATE.to_string(),
                reason: format_tera_error(&e),
            }
        })?;

        Ok(Self {
            tera,
            year: chrono::Local::now().year(),
        })
    }

    /// Render one business page.
    pub fn render(&self, page: &PageData) -> Result<String, DirectoryError> {
        let mut context =
            TeraContext::from_serialize(page).map_err(|e| DirectoryError::TemplateRender {
                name: page.name.clone(),
                reason: format_tera_error(&e),
            })?;
        context.insert("year", &self.year);

        self.tera.render(BUSINESS_PAGE_TEMPLATE, &context).map_err(|e| {
            DirectoryError::TemplateRender {
                name: page.name.clone(),
                reason: format_tera_error(&e),
            }
        })
    }
}

/// Tera's top-level message plus every underlying cause.
///
/// Tera wraps the useful part ("Variable `x` not found") in its source chain.
pub fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::models::BusinessRecord;

    fn page(name: &str) -> PageData {
        let record = BusinessRecord {
            name: Some(name.to_string()),
            category: Some("FOOD & RESTAURANTS".to_string()),
            services: Some("Patties, Catering".to_string()),
            phone: Some("416-555-0100".to_string()),
            rating: Some(4.0),
            ..BusinessRecord::default()
        };
        PageData::from_record(&record, "patty-king-rexdale", &SiteConfig::default())
    }

    #[test]
    fn test_render_builtin_template() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render(&page("Patty King")).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Patty King</h1>"));
        assert!(html.contains("<li>Patties</li>"));
        assert!(html.contains("<li>Catering</li>"));
        assert!(html.contains("patty-king-rexdale.html"));
        assert!(html.contains("\"@type\": \"LocalBusiness\""));
        assert!(html.contains("★★★★☆"));
        assert!(html.contains("FOOD &amp; RESTAURANTS"));
    }

    #[test]
    fn test_render_escapes_record_text() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render(&page("<b>Bold</b> Cafe")).unwrap();

        assert!(!html.contains("<b>Bold</b>"));
        assert!(html.contains("&lt;b&gt;Bold"));
    }

    #[test]
    fn test_custom_template() {
        let renderer = PageRenderer::with_template("{{ name }} in {{ neighborhood }}").unwrap();
        assert_eq!(renderer.render(&page("A Cafe")).unwrap(), "A Cafe in Rexdale");
    }

    #[test]
    fn test_invalid_template_is_reported() {
        let err = PageRenderer::with_template("{% if %}").err().unwrap();
        assert!(matches!(err, DirectoryError::TemplateRender { .. }));
    }

    #[test]
    fn test_missing_variable_names_business() {
        let renderer = PageRenderer::with_template("{{ no_such_field }}").unwrap();
        let err = renderer.render(&page("A Cafe")).unwrap_err();
        let DirectoryError::TemplateRender { name, reason } = err else {
            panic!("Expected TemplateRender");
        };
        assert_eq!(name, "A Cafe");
        assert!(reason.contains("no_such_field"));
    }
}
