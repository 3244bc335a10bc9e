//! DOM implementations of the core seams, built on zoon and web-sys.

pub mod analytics;
pub mod document;
pub mod logger;
pub mod router;
pub mod sections;

pub use analytics::GtagAnalytics;
pub use document::BrowserDocument;
pub use logger::ConsoleLogger;
pub use router::BrowserNavigation;
pub use sections::SectionTracker;
