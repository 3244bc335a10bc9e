//! Static route table.
//!
//! Exact-match paths only. Several paths alias the same page; each keeps
//! its own table entry so titles and sitemap entries stay per-path.

use serde::Serialize;

use crate::config::BASE_TITLE;
use crate::error::{FolioError, Result};
use crate::pages::Page;

pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    /// Title prefix, joined with the base title as `"<title> | <base>"`.
    pub title: &'static str,
}

pub static ROUTES: [Route; 9] = [
    Route { path: "/", page: Page::Home, title: "Home" },
    Route { path: "/projects", page: Page::AllProjects, title: "All Projects" },
    Route { path: "/publications", page: Page::Publications, title: "Publications" },
    Route {
        path: "/projects/brisbane_connectivity",
        page: Page::BrisbaneConnectivity,
        title: "Brisbane Connectivity",
    },
    Route {
        path: "/brisbane_connectivity",
        page: Page::BrisbaneConnectivity,
        title: "Brisbane Connectivity",
    },
    Route { path: "/projects/translink_od", page: Page::TranslinkOd, title: "Translink Patronage" },
    Route { path: "/translink-od", page: Page::TranslinkOd, title: "Translink Patronage" },
    Route {
        path: "/projects/transitmate_chatbot",
        page: Page::TransitmateChatbot,
        title: "TransitMate Chatbot",
    },
    Route {
        path: "/projects/feature_engineering_impact_analysis",
        page: Page::FeatureEngineering,
        title: "Feature Engineering",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(&ROUTES)
    }
}

impl RouteTable {
    pub const fn new(routes: &'static [Route]) -> Self {
        Self { routes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Route> + use<> {
        let routes = self.routes;
        routes.iter()
    }

    pub fn get(&self, path: &str) -> Option<&'static Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn require(&self, path: &str) -> Result<&'static Route> {
        self.get(path).ok_or_else(|| FolioError::UnknownRoute {
            path: path.to_string(),
        })
    }

    /// Page mounted for `path`; unregistered paths render [`Page::NotFound`].
    pub fn page(&self, path: &str) -> Page {
        self.get(path).map_or(Page::NotFound, |route| route.page)
    }

    /// Document title for `path`.
    pub fn title(&self, path: &str, base_title: &str) -> String {
        match self.get(path) {
            Some(route) => format!("{} | {base_title}", route.title),
            None => format!("{BASE_TITLE} | {base_title}"),
        }
    }

    /// First route whose page renders the section anchor `id`.
    pub fn owner_of_section(&self, id: &str) -> Option<&'static Route> {
        self.routes.iter().find(|route| route.page.declares_section(id))
    }

    /// Every path that mounts `page`.
    pub fn paths_of(&self, page: Page) -> impl Iterator<Item = &'static str> + use<> {
        let routes = self.routes;
        routes
            .iter()
            .filter(move |route| route.page == page)
            .map(|route| route.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_table() {
        let routes = RouteTable::default();
        assert_eq!(
            routes.title("/publications", BASE_TITLE),
            "Publications | Transport Analytics & Insights"
        );
        assert_eq!(
            routes.title("/translink-od", BASE_TITLE),
            "Translink Patronage | Transport Analytics & Insights"
        );
    }

    #[test]
    fn unknown_path_gets_fallback_title_and_not_found_page() {
        let routes = RouteTable::default();
        assert_eq!(
            routes.title("/nope", BASE_TITLE),
            "Transport Analytics & Insights | Transport Analytics & Insights"
        );
        assert_eq!(routes.page("/nope"), Page::NotFound);
        assert!(matches!(routes.require("/nope"), Err(FolioError::UnknownRoute { .. })));
    }

    #[test]
    fn matching_is_exact() {
        let routes = RouteTable::default();
        assert_eq!(routes.page("/projects/"), Page::NotFound);
        assert_eq!(routes.page("/Projects"), Page::NotFound);
    }

    #[test]
    fn aliases_share_a_page() {
        let routes = RouteTable::default();
        let paths: Vec<_> = routes.paths_of(Page::BrisbaneConnectivity).collect();
        assert_eq!(paths, ["/projects/brisbane_connectivity", "/brisbane_connectivity"]);
    }

    #[test]
    fn home_owns_projects_anchor() {
        let routes = RouteTable::default();
        assert_eq!(routes.owner_of_section("projects").map(|r| r.path), Some(HOME_PATH));
        assert!(routes.owner_of_section("no-such-anchor").is_none());
    }
}
