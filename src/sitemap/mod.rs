//! `sitemap.xml` generation.
//!
//! The sitemap lists the site's static pages followed by one entry per business
//! page. Business slugs come from [`crate::slug::assign_slugs`], the same
//! function the page generator uses.

use std::fmt::Write as _;

use crate::config::{Config, StaticPage};
use crate::constants::BUSINESSES_DIR;
use crate::models::BusinessRecord;
use crate::slug::assign_slugs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: String,
    pub priority: String,
}

/// Static pages of the Rexdale site, listed before the business pages.
const DEFAULT_STATIC_PAGES: &[(&str, &str, &str)] = &[
    ("/", "daily", "1.0"),
    ("/jobs/", "weekly", "0.95"),
    ("/jobs/entry-level-jobs-toronto.html", "weekly", "0.90"),
    ("/jobs/warehouse-jobs-etobicoke.html", "weekly", "0.90"),
    ("/jobs/pearson-airport-jobs.html", "weekly", "0.90"),
    ("/jobs/retail-jobs-etobicoke.html", "weekly", "0.90"),
    ("/jobs/restaurant-jobs-etobicoke.html", "weekly", "0.90"),
    ("/jobs/security-guard-jobs-toronto.html", "weekly", "0.90"),
    ("/jobs/cleaning-jobs-toronto.html", "weekly", "0.90"),
    ("/jobs/healthcare-jobs-toronto.html", "weekly", "0.90"),
    ("/jobs/construction-jobs-toronto.html", "weekly", "0.90"),
    ("/jobs/factory-jobs-etobicoke.html", "weekly", "0.90"),
    ("/jobs/remote-jobs-toronto.html", "weekly", "0.90"),
    ("/jobs/delivery-driver-jobs-toronto.html", "weekly", "0.90"),
    ("/jobs/work-from-home-customer-service.html", "weekly", "0.90"),
    ("/jobs/night-shift-jobs-toronto.html", "weekly", "0.85"),
    ("/jobs/weekend-jobs-toronto.html", "weekly", "0.85"),
    ("/jobs/summer-jobs-toronto-2026.html", "weekly", "0.85"),
    ("/jobs/jobs-near-humber-college.html", "weekly", "0.85"),
    ("/jobs/jobs-near-woodbine-mall.html", "weekly", "0.85"),
    ("/jobs/jobs-near-kipling-station.html", "weekly", "0.85"),
    ("/jobs/highway-27-warehouse-jobs.html", "weekly", "0.85"),
    ("/jobs/temp-agency-jobs-etobicoke.html", "weekly", "0.85"),
    ("/jobs/jobs-for-newcomers-toronto.html", "weekly", "0.85"),
    ("/jobs/jobs-for-parents-etobicoke.html", "weekly", "0.85"),
    ("/jobs/jobs-for-teens-toronto.html", "weekly", "0.85"),
    ("/jobs/resume-tips-no-experience.html", "weekly", "0.80"),
    ("/jobs/interview-tips-entry-level.html", "weekly", "0.80"),
    ("/jobs/free-job-resources-toronto.html", "weekly", "0.80"),
    ("/jobs/minimum-wage-ontario-guide.html", "weekly", "0.80"),
    ("/jobs/how-to-get-forklift-licence-ontario.html", "monthly", "0.75"),
    ("/jobs/security-guard-licence-ontario.html", "monthly", "0.75"),
    ("/jobs/workplace-safety-certifications-ontario.html", "monthly", "0.75"),
    ("/jobs/how-to-become-psw-ontario.html", "monthly", "0.75"),
    ("/jobs/smart-serve-certification-ontario.html", "monthly", "0.75"),
];

/// The built-in static page list.
pub fn default_static_pages() -> Vec<StaticPage> {
    DEFAULT_STATIC_PAGES
        .iter()
        .map(|(path, changefreq, priority)| StaticPage {
            path: (*path).to_string(),
            changefreq: (*changefreq).to_string(),
            priority: (*priority).to_string(),
        })
        .collect()
}

/// Entries for the static pages and every business, in that order.
pub fn build_entries(businesses: &[BusinessRecord], config: &Config) -> Vec<SitemapEntry> {
    let lastmod = config.sitemap.lastmod_or_today();
    let static_pages = config
        .sitemap
        .static_pages
        .clone()
        .unwrap_or_else(default_static_pages);

    let mut entries: Vec<SitemapEntry> = static_pages
        .into_iter()
        .map(|page| SitemapEntry {
            loc: config.site.url(&page.path),
            lastmod: lastmod.clone(),
            changefreq: page.changefreq,
            priority: page.priority,
        })
        .collect();

    entries.extend(assign_slugs(businesses).into_iter().map(|slug| SitemapEntry {
        loc: config.site.url(&format!("{BUSINESSES_DIR}/{slug}.html")),
        lastmod: lastmod.clone(),
        changefreq: config.sitemap.business_changefreq.clone(),
        priority: config.sitemap.business_priority.clone(),
    }));

    entries
}

/// Serialize entries as a sitemap document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(160 * (entries.len() + 1));
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NS}\" xmlns:image=\"{IMAGE_NS}\">");

    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.loc));
        let _ = writeln!(xml, "    <lastmod>{}</lastmod>", escape_xml(&entry.lastmod));
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", escape_xml(&entry.changefreq));
        let _ = writeln!(xml, "    <priority>{}</priority>", escape_xml(&entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Build the complete sitemap for a dataset.
pub fn build_sitemap(businesses: &[BusinessRecord], config: &Config) -> String {
    render_xml(&build_entries(businesses, config))
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
