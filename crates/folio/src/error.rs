//! Error types for the navigation core.
//!
//! Scroll and analytics failures are not errors: a missing element or an
//! absent collector is a logged no-op. Errors only come from parsing input
//! (hrefs, paths, config) and from writing generated documents.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    /// The href is not an in-app link (`/path`, `/path#id` or `#id`).
    #[error("invalid href '{href}': {reason}")]
    InvalidHref { href: String, reason: &'static str },

    /// No route is registered for the path.
    #[error("no route registered for '{path}'")]
    UnknownRoute { path: String },

    /// Site config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Site config is not valid TOML or has wrong field types.
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    /// Sitemap serialization failed.
    #[error("failed to write sitemap: {0}")]
    Sitemap(String),
}

pub type Result<T, E = FolioError> = std::result::Result<T, E>;
