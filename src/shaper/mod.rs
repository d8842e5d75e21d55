//! Derived display fields for a business page.
//!
//! Everything here is a pure function of one [`BusinessRecord`] and the
//! [`SiteConfig`]; rendering happens later in [`crate::templating`]. Malformed
//! contact fields never fail: a website or phone that cannot be used simply
//! comes out empty.

use serde::Serialize;
use serde_json::{Value, json};

use crate::config::SiteConfig;
use crate::constants::{ELLIPSIS, META_DESCRIPTION_BUDGET};
use crate::models::{BusinessRecord, non_blank};

/// Website values that mean "no website" in the hand-maintained dataset.
const WEBSITE_PLACEHOLDERS: &[&str] = &[
    "yes",
    "no",
    "n/a",
    "na",
    "none",
    "null",
    "unknown",
    "tbd",
    "not available",
    "-",
];

/// Meta description, at most [`META_DESCRIPTION_BUDGET`] characters.
///
/// Over-long text is cut back to a word boundary and suffixed with `...`.
pub fn meta_description(record: &BusinessRecord, site: &SiteConfig) -> String {
    let services = non_blank(record.services.as_deref())
        .map(str::trim)
        .unwrap_or(&site.services_fallback);
    let text = format!(
        "{} - {} in {}, {}. {} Find contact info, hours, and more.",
        record.name(),
        record.category(),
        record.neighborhood(),
        site.city,
        services
    );
    fit_to_budget(&text, META_DESCRIPTION_BUDGET)
}

fn fit_to_budget(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }

    let keep = budget.saturating_sub(ELLIPSIS.len());
    let mut chars = text.chars();
    let prefix: String = chars.by_ref().take(keep).collect();
    let at_boundary = chars.next().is_some_and(char::is_whitespace);

    let cut = match prefix.rfind(char::is_whitespace) {
        Some(idx) if !at_boundary && idx > 0 => &prefix[..idx],
        _ => prefix.as_str(),
    };
    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

/// Absolute website URL, or an empty string when the value is unusable.
///
/// A usable value has a dot, no whitespace and is not a placeholder such as
/// "N/A". Values without a scheme get `https://`.
pub fn normalize_website_url(raw: &str) -> String {
    let candidate = raw.trim();
    if candidate.is_empty()
        || candidate.chars().any(char::is_whitespace)
        || !candidate.contains('.')
        || WEBSITE_PLACEHOLDERS.contains(&candidate.to_lowercase().as_str())
    {
        return String::new();
    }

    let lower = candidate.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        candidate.to_string()
    } else {
        format!("https://{candidate}")
    }
}

/// `tel:` link keeping digits and one leading `+`; empty when there are no digits.
pub fn tel_link(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    if trimmed.starts_with('+') {
        format!("tel:+{digits}")
    } else {
        format!("tel:{digits}")
    }
}

/// Host of a website URL without scheme, `www.`, path, query or fragment.
pub fn website_domain(url: &str) -> String {
    let mut rest = url.trim();
    for prefix in ["https://", "http://", "www."] {
        if rest.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix)) {
            rest = &rest[prefix.len()..];
        }
    }
    rest.split(['/', '?', '#']).next().unwrap_or_default().to_string()
}

/// Comma-separated keyword list for the page.
pub fn keywords(record: &BusinessRecord, site: &SiteConfig) -> String {
    let mut parts = vec![
        record.name(),
        record.category(),
        record.neighborhood(),
        site.city.as_str(),
    ];
    parts.extend(site.extra_keywords.iter().map(String::as_str));
    parts.join(", ")
}

/// Services split on commas, trimmed, empties dropped.
pub fn services_list(record: &BusinessRecord) -> Vec<String> {
    record
        .services
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// First `max` characters of `text` followed by `...`, or `text` if it fits.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}{ELLIPSIS}")
}

/// Google Maps search link for an address.
pub fn maps_link(address: &str) -> Option<String> {
    let address = address.trim();
    if address.is_empty() {
        return None;
    }
    reqwest::Url::parse_with_params("https://maps.google.com/", &[("q", address)])
        .ok()
        .map(String::from)
}

/// Everything the business page template needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub neighborhood: String,
    pub title: String,
    pub og_title: String,
    pub meta_description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub og_image_url: String,
    pub home_url: String,
    pub directory_url: String,
    pub site_name: String,
    pub author: String,
    pub locale: String,
    pub city: String,
    pub region: String,
    pub website_url: Option<String>,
    pub website_domain: Option<String>,
    pub phone: Option<String>,
    pub tel_link: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub maps_link: Option<String>,
    pub postal_code: Option<String>,
    pub hours: Option<String>,
    pub languages: Option<String>,
    pub services: Vec<String>,
    pub rating: Option<f64>,
    pub halal: bool,
    /// Serialized schema.org `LocalBusiness`, safe to inline in a `<script>`.
    pub local_business_json_ld: String,
    /// Serialized schema.org `BreadcrumbList`, safe to inline in a `<script>`.
    pub breadcrumb_json_ld: String,
}

impl PageData {
    pub fn from_record(record: &BusinessRecord, slug: &str, site: &SiteConfig) -> Self {
        let name = record.name().to_string();
        let category = record.category().to_string();
        let neighborhood = record.neighborhood().to_string();
        let canonical_url = site.url(&format!("{}/{slug}.html", crate::constants::BUSINESSES_DIR));
        let description = meta_description(record, site);

        let website_url = record
            .website
            .as_deref()
            .map(normalize_website_url)
            .filter(|url| !url.is_empty());
        let phone = non_blank(record.phone.as_deref()).map(|p| p.trim().to_string());
        let tel = phone.as_deref().map(tel_link).filter(|t| !t.is_empty());
        let address = non_blank(record.address.as_deref()).map(|a| a.trim().to_string());
        let og_image_url = site.url(&site.og_image);

        let local_business = local_business_schema(
            record,
            site,
            &description,
            &og_image_url,
            website_url.as_deref(),
            phone.as_deref(),
        );
        let breadcrumb = breadcrumb_schema(site, &name, &canonical_url);

        Self {
            slug: slug.to_string(),
            title: format!("{name} | {category} in {neighborhood} - {}", site.author),
            og_title: format!("{name} | {category}"),
            meta_description: description,
            keywords: keywords(record, site),
            canonical_url,
            og_image_url,
            home_url: site.url("/"),
            directory_url: site.url("/#directory"),
            site_name: site.name.clone(),
            author: site.author.clone(),
            locale: site.locale.clone(),
            city: site.city.clone(),
            region: site.region.clone(),
            website_domain: website_url.as_deref().map(website_domain),
            website_url,
            phone,
            tel_link: tel,
            email: non_blank(record.email.as_deref()).map(|e| e.trim().to_string()),
            maps_link: address.as_deref().and_then(maps_link),
            address,
            postal_code: non_blank(record.postal_code.as_deref()).map(str::to_string),
            hours: non_blank(record.hours.as_deref()).map(str::to_string),
            languages: non_blank(record.languages.as_deref()).map(str::to_string),
            services: services_list(record),
            rating: record.rating.filter(|r| *r > 0.0),
            halal: record.halal.unwrap_or(false),
            local_business_json_ld: inline_json(&local_business),
            breadcrumb_json_ld: inline_json(&breadcrumb),
            name,
            category,
            neighborhood,
        }
    }
}

fn local_business_schema(
    record: &BusinessRecord,
    site: &SiteConfig,
    description: &str,
    image: &str,
    website_url: Option<&str>,
    phone: Option<&str>,
) -> Value {
    let mut address = json!({
        "@type": "PostalAddress",
        "addressLocality": record.neighborhood(),
        "addressRegion": site.region,
        "addressCountry": site.country,
    });
    if let Some(street) = non_blank(record.address.as_deref()) {
        address["streetAddress"] = json!(street.trim());
    }
    if let Some(postal_code) = non_blank(record.postal_code.as_deref()) {
        address["postalCode"] = json!(postal_code.trim());
    }

    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": record.name(),
        "image": image,
        "description": description,
        "address": address,
        "areaServed": site.areas_served,
        "priceRange": "$$",
    });
    if let Some(url) = website_url {
        schema["url"] = json!(url);
    }
    if let Some(phone) = phone {
        schema["telephone"] = json!(phone);
    }
    if let Some(email) = non_blank(record.email.as_deref()) {
        schema["email"] = json!(email.trim());
    }
    if let Some(hours) = non_blank(record.hours.as_deref()) {
        schema["openingHours"] = json!(hours.trim());
    }
    if let Some(rating) = record.rating.filter(|r| *r > 0.0) {
        schema["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": rating,
            "bestRating": 5,
        });
    }
    schema
}

fn breadcrumb_schema(site: &SiteConfig, name: &str, canonical_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            { "@type": "ListItem", "position": 1, "name": "Home", "item": site.url("/") },
            { "@type": "ListItem", "position": 2, "name": "Business Directory", "item": site.url("/#directory") },
            { "@type": "ListItem", "position": 3, "name": name, "item": canonical_url },
        ]
    })
}

// `</script>` inside a string value would close the enclosing script element.
fn inline_json(value: &Value) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_default()
        .replace("</", "<\\/")
}
