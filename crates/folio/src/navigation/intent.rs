//! Link-click resolution: scroll within the current page, or navigate and
//! carry the scroll target to the destination page.

use serde::Serialize;

use super::{Href, NavigationIntent, NavigationType};
use crate::routes::RouteTable;

/// Where the clicked anchor lives. Only table-of-contents links rewrite the
/// URL fragment when they scroll in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkOrigin {
    /// Header, footer and mobile menu links.
    SiteNav,
    TableOfContents,
    /// Cards, "Back to ..." links and other in-body links.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// Smooth-scroll to an element already on the page. No navigation.
    ScrollInPage {
        target_id: String,
        rewrite_fragment: bool,
    },
    /// Go to a route, optionally carrying a scroll target. A link to the
    /// current pathname replaces the entry instead of pushing a duplicate.
    Navigate {
        to: String,
        intent: Option<NavigationIntent>,
        navigation_type: NavigationType,
    },
}

impl ClickOutcome {
    /// In-app anchors never fall through to the browser's own navigation.
    pub fn prevents_default(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntentResolver {
    routes: RouteTable,
}

impl IntentResolver {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn resolve(&self, href: &Href, current_path: &str, origin: LinkOrigin) -> ClickOutcome {
        let target_id = href.target_id();
        let destination = match (href.path(), target_id) {
            (Some(path), _) => path,
            (None, Some(id)) => self.route_rendering(id, current_path),
            (None, None) => current_path,
        };

        match target_id {
            Some(id) if destination == current_path => ClickOutcome::ScrollInPage {
                target_id: id.to_string(),
                rewrite_fragment: origin == LinkOrigin::TableOfContents,
            },
            _ => ClickOutcome::Navigate {
                to: destination.to_string(),
                intent: target_id.map(NavigationIntent::new),
                navigation_type: if destination == current_path {
                    NavigationType::Replace
                } else {
                    NavigationType::Push
                },
            },
        }
    }

    /// Route a bare `#id` link points at: the current page when it renders
    /// the anchor, else the page that owns it, else the current page.
    fn route_rendering<'a>(&self, id: &str, current_path: &'a str) -> &'a str {
        if self.routes.page(current_path).declares_section(id) {
            return current_path;
        }
        match self.routes.owner_of_section(id) {
            Some(route) => route.path,
            None => current_path,
        }
    }
}
