//! Per-route document title and page-view reporting.

use crate::config::SiteConfig;
use crate::effects::{Analytics, Document};
use crate::routes::RouteTable;

#[derive(Debug)]
pub struct PageMetadata {
    base_title: String,
    analytics_id: Option<String>,
    last_path: Option<String>,
}

impl PageMetadata {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            base_title: config.base_title.clone(),
            analytics_id: config.analytics_id.clone(),
            last_path: None,
        }
    }

    /// Apply title and page view for `pathname`. Runs only when the
    /// pathname changed; returns the title it set.
    pub fn apply(
        &mut self,
        routes: &RouteTable,
        pathname: &str,
        document: &mut dyn Document,
        analytics: Option<&mut dyn Analytics>,
    ) -> Option<String> {
        if self.last_path.as_deref() == Some(pathname) {
            return None;
        }
        self.last_path = Some(pathname.to_string());

        let title = routes.title(pathname, &self.base_title);
        document.set_title(&title);

        match (analytics, &self.analytics_id) {
            (Some(analytics), Some(id)) => analytics.page_view(id, pathname),
            (None, _) => log::debug!("no analytics collector, skipping page view for {pathname}"),
            (Some(_), None) => {}
        }
        Some(title)
    }
}
