//! Site configuration.
//!
//! Every field has a default matching the deployed site, so an empty TOML
//! document (or no document at all) is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::sections::ReadingBand;

pub const BASE_TITLE: &str = "Transport Analytics & Insights";
pub const ANALYTICS_ID: &str = "G-8CTJS8JXM1";
pub const SITE_HOSTNAME: &str = "https://transportaai.github.io";

/// Delay between a page mount and a deferred scroll to a target element.
pub const SETTLE_DELAY_MS: u32 = 100;

/// Widths above this close the mobile navigation menu.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_title: String,
    /// `None` disables page-view events even when a collector is present.
    pub analytics_id: Option<String>,
    pub settle_delay_ms: u32,
    pub reading_band: ReadingBand,
    pub mobile_breakpoint_px: u32,
    pub hostname: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_title: BASE_TITLE.to_string(),
            analytics_id: Some(ANALYTICS_ID.to_string()),
            settle_delay_ms: SETTLE_DELAY_MS,
            reading_band: ReadingBand::default(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            hostname: SITE_HOSTNAME.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| FolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.settle_delay_ms, 100);
        assert_eq!(config.analytics_id.as_deref(), Some("G-8CTJS8JXM1"));
    }

    #[test]
    fn partial_override() {
        let config = SiteConfig::from_toml_str(
            r#"
            settle_delay_ms = 40
            hostname = "http://localhost:8080"

            [reading_band]
            top_percent = 10.0
            bottom_percent = 50.0
            "#,
        )
        .unwrap();
        assert_eq!(config.settle_delay_ms, 40);
        assert_eq!(config.hostname, "http://localhost:8080");
        assert_eq!(config.reading_band.top_percent, 10.0);
        assert_eq!(config.base_title, BASE_TITLE);
    }

    #[test]
    fn wrong_type_is_config_error() {
        let error = SiteConfig::from_toml_str("settle_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(error, FolioError::Config(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let error = SiteConfig::load(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(error, FolioError::ConfigRead { .. }));
    }
}
