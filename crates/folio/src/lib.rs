//! Navigation, scroll restoration and section tracking for the
//! Transport Analytics & Insights site.
//!
//! The core is platform independent: every side effect goes through the
//! [`effects`] traits. `platform::headless` drives the core against a
//! virtual document and clock; `platform::browser` (feature `browser`)
//! wires it to the DOM through zoon and web-sys.

pub mod config;
pub mod content;
pub mod disclaimer;
pub mod effects;
pub mod error;
pub mod menu;
pub mod metadata;
pub mod navigation;
pub mod pages;
pub mod platform;
pub mod routes;
pub mod sections;
pub mod sitemap;

#[cfg(feature = "browser")]
pub use zoon;

pub use config::SiteConfig;
pub use error::{FolioError, Result};
pub use navigation::{
    ClickOutcome, Href, LinkOrigin, Location, NavigationIntent, NavigationType, Navigator,
    PendingScroll, ScrollDecision, Transition,
};
pub use pages::Page;
pub use routes::{Route, RouteTable};
pub use sections::{ReadingBand, SectionDescriptor, SectionObserver};
