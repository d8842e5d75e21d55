//! Site configuration (`bizdir.toml`)
//!
//! Every setting has a built-in default matching the Rexdale directory, so the
//! file is optional. Lookup order:
//!
//! 1. `--config <path>` (must exist)
//! 2. `./bizdir.toml` if present
//! 3. built-in defaults
//!
//! ```toml
//! [site]
//! base_url = "https://rexdalejobs.com"
//! city = "Toronto"
//!
//! [paths]
//! data = "data/businesses.json"
//! output_dir = "."
//!
//! [sitemap]
//! lastmod = "2026-02-16"
//!
//! [directory]
//! page_size = 12
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE, DEFAULT_PAGE_SIZE};
use crate::core::DirectoryError;

/// Parsed `bizdir.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub paths: PathsConfig,
    pub sitemap: SitemapConfig,
    pub directory: DirectoryConfig,
}

/// Identity of the published site, used in page metadata and JSON-LD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute site root without trailing slash.
    pub base_url: String,
    pub name: String,
    /// Author shown in page metadata.
    pub author: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub locale: String,
    /// Meta description sentence used when a business lists no services.
    pub services_fallback: String,
    /// Appended to every page's keyword list after the city.
    pub extra_keywords: Vec<String>,
    /// Areas listed as `areaServed` in the business JSON-LD.
    pub areas_served: Vec<String>,
    /// Site-relative path of the Open Graph image.
    pub og_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://rexdalejobs.com".to_string(),
            name: "Rexdale Directory".to_string(),
            author: "RexdaleJobs.com".to_string(),
            city: "Toronto".to_string(),
            region: "ON".to_string(),
            country: "CA".to_string(),
            locale: "en_CA".to_string(),
            services_fallback: "Professional services for Rexdale & Etobicoke.".to_string(),
            extra_keywords: vec!["Etobicoke".to_string(), "Rexdale".to_string()],
            areas_served: vec![
                "Rexdale".to_string(),
                "Etobicoke".to_string(),
                "Toronto".to_string(),
            ],
            og_image: "/images/og-business.png".to_string(),
        }
    }
}

impl SiteConfig {
    /// `base_url` joined with a site-relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Dataset path or `http(s)://` URL.
    pub data: String,
    /// Root that receives `businesses/` and `sitemap.xml`.
    pub output_dir: PathBuf,
    /// Preference store file; platform data dir when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data: "data/businesses.json".to_string(),
            output_dir: PathBuf::from("."),
            store: None,
        }
    }
}

/// Sitemap settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// `YYYY-MM-DD`; the build date when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    pub business_changefreq: String,
    pub business_priority: String,
    /// Replaces the built-in static page list when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_pages: Option<Vec<StaticPage>>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            lastmod: None,
            business_changefreq: "monthly".to_string(),
            business_priority: "0.70".to_string(),
            static_pages: None,
        }
    }
}

impl SitemapConfig {
    /// Configured `lastmod`, or today's date.
    pub fn lastmod_or_today(&self) -> String {
        self.lastmod
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string())
    }
}

/// A non-business page listed in the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPage {
    /// Site-relative path, e.g. `/jobs/`.
    pub path: String,
    pub changefreq: String,
    pub priority: String,
}

/// Browsing engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub page_size: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Resolve and load the configuration.
    ///
    /// An explicit path must exist; otherwise `./bizdir.toml` is used when present
    /// and the defaults when not.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(DirectoryError::ConfigNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            return Self::load_from(path).await;
        }

        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            Self::load_from(&local).await
        } else {
            tracing::debug!("No {} found, using built-in defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&content, path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn from_toml_str(content: &str, path: &Path) -> Result<Self, DirectoryError> {
        let config: Self = toml::from_str(content).map_err(|e| DirectoryError::ConfigParseError {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

        if config.directory.page_size == 0 {
            return Err(DirectoryError::ConfigParseError {
                file: path.display().to_string(),
                reason: "directory.page_size must be at least 1".to_string(),
            });
        }

        Ok(config)
    }

    /// Commented starter file written by `bizdir init`.
    pub fn init_template() -> String {
        let defaults = Self::default();
        format!(
            r#"# bizdir configuration
# Every key is optional; omitted keys use the values shown here.

[site]
base_url = "{base_url}"
name = "{name}"
author = "{author}"
city = "{city}"
region = "{region}"
country = "{country}"
locale = "{locale}"
services_fallback = "{services_fallback}"
extra_keywords = ["Etobicoke", "Rexdale"]
areas_served = ["Rexdale", "Etobicoke", "Toronto"]
og_image = "{og_image}"

[paths]
# Local path or http(s):// URL
data = "{data}"
output_dir = "."
# store = "prefs.json"

[sitemap]
# lastmod = "2026-02-16"   # defaults to the build date
business_changefreq = "{changefreq}"
business_priority = "{priority}"
# Replaces the built-in static page list:
# [[sitemap.static_pages]]
# path = "/"
# changefreq = "daily"
# priority = "1.0"

[directory]
page_size = {page_size}
"#,
            base_url = defaults.site.base_url,
            name = defaults.site.name,
            author = defaults.site.author,
            city = defaults.site.city,
            region = defaults.site.region,
            country = defaults.site.country,
            locale = defaults.site.locale,
            services_fallback = defaults.site.services_fallback,
            og_image = defaults.site.og_image,
            data = defaults.paths.data,
            changefreq = defaults.sitemap.business_changefreq,
            priority = defaults.sitemap.business_priority,
            page_size = defaults.directory.page_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.site.base_url, "https://rexdalejobs.com");
        assert_eq!(config.site.city, "Toronto");
        assert_eq!(config.sitemap.business_priority, "0.70");
        assert_eq!(config.directory.page_size, 12);
        assert!(config.sitemap.static_pages.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let toml = r#"
            [site]
            base_url = "https://example.org/"

            [directory]
            page_size = 24
        "#;

        let config = Config::from_toml_str(toml, Path::new("bizdir.toml")).unwrap();
        assert_eq!(config.site.base_url, "https://example.org/");
        assert_eq!(config.site.city, "Toronto");
        assert_eq!(config.directory.page_size, 24);
        assert_eq!(config.site.url("/businesses/a.html"), "https://example.org/businesses/a.html");
    }

    #[test]
    fn test_static_pages_table() {
        let toml = r#"
            [[sitemap.static_pages]]
            path = "/"
            changefreq = "daily"
            priority = "1.0"
        "#;

        let config = Config::from_toml_str(toml, Path::new("bizdir.toml")).unwrap();
        let pages = config.sitemap.static_pages.unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].changefreq, "daily");
    }

    #[test]
    fn test_invalid_toml_is_config_parse_error() {
        let err = Config::from_toml_str("[site\nbase_url=", Path::new("custom.toml")).unwrap_err();
        assert!(matches!(err, DirectoryError::ConfigParseError { ref file, .. } if file == "custom.toml"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = Config::from_toml_str("[directory]\npage_size = 0", Path::new("bizdir.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("bizdir.toml"));
    }

    #[test]
    fn test_init_template_parses_to_defaults() {
        let config = Config::from_toml_str(&Config::init_template(), Path::new("bizdir.toml"))
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_lastmod_configured_or_today() {
        let mut sitemap = SitemapConfig::default();
        assert_eq!(sitemap.lastmod_or_today().len(), 10);

        sitemap.lastmod = Some("2026-02-16".to_string());
        assert_eq!(sitemap.lastmod_or_today(), "2026-02-16");
    }

    #[tokio::test]
    async fn test_load_explicit_missing_path() {
        let temp = tempdir().unwrap();
        let err = Config::load(Some(&temp.path().join("nope.toml"))).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DirectoryError>(),
            Some(DirectoryError::ConfigNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        tokio::fs::write(&path, "[site]\ncity = \"Mississauga\"\n").await.unwrap();

        let config = Config::load(Some(&path)).await.unwrap();
        assert_eq!(config.site.city, "Mississauga");
    }
}
