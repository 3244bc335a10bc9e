//! Per-transition orchestration.
//!
//! The navigator is the single place that applies navigation side effects:
//! page metadata first, then the scroll decision. Smooth scrolling is
//! switched off when an article goes away and on when one mounts, with the
//! immediate scroll in between so it always jumps. Deferred scrolls are
//! handed back to the platform as [`PendingScroll`]s; the platform waits
//! for the settle delay and calls [`Navigator::fire`].

use super::{ClickOutcome, Href, IntentResolver, LinkOrigin, Location, PendingScroll};
use super::{ScrollDecision, ScrollRestoration, Transition};
use crate::config::SiteConfig;
use crate::effects::{Analytics, Document, ScrollBehavior};
use crate::metadata::PageMetadata;
use crate::pages::Page;
use crate::routes::{HOME_PATH, RouteTable};

#[derive(Debug)]
pub struct Navigator {
    routes: RouteTable,
    resolver: IntentResolver,
    restoration: ScrollRestoration,
    metadata: PageMetadata,
    location: Option<Location>,
    page: Option<Page>,
    last_decision: Option<ScrollDecision>,
}

impl Navigator {
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_routes(config, RouteTable::default())
    }

    pub fn with_routes(config: &SiteConfig, routes: RouteTable) -> Self {
        Self {
            routes,
            resolver: IntentResolver::new(routes),
            restoration: ScrollRestoration::new(config.settle_delay_ms),
            metadata: PageMetadata::new(config),
            location: None,
            page: None,
            last_decision: None,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn current_path(&self) -> &str {
        self.location
            .as_ref()
            .map_or(HOME_PATH, |location| location.pathname.as_str())
    }

    /// Mounted page, if any transition has been committed.
    pub fn page(&self) -> Option<Page> {
        self.page
    }

    pub fn last_decision(&self) -> Option<&ScrollDecision> {
        self.last_decision.as_ref()
    }

    /// Apply a committed transition. Returns the deferred scroll, if the
    /// decision needs one.
    pub fn commit(
        &mut self,
        transition: &Transition,
        document: &mut dyn Document,
        analytics: Option<&mut dyn Analytics>,
    ) -> Option<PendingScroll> {
        let pathname = transition.location.pathname.as_str();
        let page = self.routes.page(pathname);
        let remounted = self.page != Some(page);
        if remounted && self.page.is_some_and(Page::is_article) {
            document.set_smooth_scrolling(false);
        }
        self.page = Some(page);

        if let Some(title) = self.metadata.apply(&self.routes, pathname, document, analytics) {
            log::info!("{:?} {} ({title})", transition.navigation_type, transition.location.path_and_hash());
        }

        let decision = self.restoration.on_transition(transition);
        let pending = self.restoration.pending(&decision);
        match &decision {
            ScrollDecision::DeferToBrowser => {
                log::debug!("pop to {pathname}: browser restores scroll");
            }
            ScrollDecision::ScrollToTop => document.scroll_to_top(),
            ScrollDecision::ScrollToElement { target_id, source } => {
                log::debug!("scroll to #{target_id} ({source:?}) after settle delay");
            }
            ScrollDecision::AlreadyHandled => {}
        }
        if decision != ScrollDecision::AlreadyHandled {
            self.location = Some(transition.location.clone());
            self.last_decision = Some(decision);
        }
        if remounted && page.is_article() {
            document.set_smooth_scrolling(true);
        }
        pending
    }

    /// Run a deferred scroll. Stale generations and missing elements are
    /// no-ops; returns whether a scroll happened.
    pub fn fire(&self, pending: &PendingScroll, document: &mut dyn Document) -> bool {
        if !self.restoration.is_live(pending) {
            log::debug!(
                "dropping stale scroll to #{} (generation {} < {})",
                pending.target_id,
                pending.generation,
                self.restoration.generation()
            );
            return false;
        }
        let scrolled = document.scroll_into_view(&pending.target_id, ScrollBehavior::Smooth);
        if !scrolled {
            log::debug!("no element #{} to scroll to", pending.target_id);
        }
        scrolled
    }

    /// Resolve an in-app link click. In-page outcomes are applied here, and
    /// a table-of-contents click rewrites the fragment even when its anchor
    /// is missing. `Navigate` outcomes are for the caller's history to push and commit.
    pub fn click(
        &self,
        href: &Href,
        origin: LinkOrigin,
        document: &mut dyn Document,
    ) -> ClickOutcome {
        let outcome = self.resolver.resolve(href, self.current_path(), origin);
        if let ClickOutcome::ScrollInPage {
            target_id,
            rewrite_fragment,
        } = &outcome
        {
            if !document.scroll_into_view(target_id, ScrollBehavior::Smooth) {
                log::debug!("no element #{target_id} on {}", self.current_path());
            }
            if *rewrite_fragment {
                document.replace_fragment(target_id);
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{MemoryHistory, NavigationIntent};
    use crate::platform::headless::HeadlessDocument;

    fn document() -> HeadlessDocument {
        HeadlessDocument::new(800.0).with_page_layout(Page::Home, 100.0, 900.0)
    }

    #[test]
    fn push_without_target_scrolls_to_top() {
        let mut navigator = Navigator::new(&SiteConfig::default());
        let mut document = document();
        document.scroll_to(1234.0);
        let (_, initial) = MemoryHistory::open("/");
        assert!(navigator.commit(&initial, &mut document, None).is_none());
        assert_eq!(document.scroll_position(), (0.0, 0.0));
        assert_eq!(navigator.last_decision(), Some(&ScrollDecision::ScrollToTop));
    }

    #[test]
    fn intent_is_deferred_then_fired() {
        let mut navigator = Navigator::new(&SiteConfig::default());
        let mut document = document();
        let (mut history, initial) = MemoryHistory::open("/publications");
        navigator.commit(&initial, &mut document, None);

        let transition = history.push("/", Some(NavigationIntent::new("about")));
        let pending = navigator.commit(&transition, &mut document, None).unwrap();
        assert_eq!(pending.delay_ms, 100);
        assert!(navigator.fire(&pending, &mut document));
        assert!(document.is_in_view("about"));
    }

    #[test]
    fn stale_pending_scroll_does_nothing() {
        let mut navigator = Navigator::new(&SiteConfig::default());
        let mut document = document();
        let (mut history, initial) = MemoryHistory::open("/projects");
        navigator.commit(&initial, &mut document, None);
        let pending = navigator
            .commit(&history.push("/", Some(NavigationIntent::new("contact"))), &mut document, None)
            .unwrap();
        navigator.commit(&history.push("/publications", None), &mut document, None);
        let calls = document.scroll_calls().len();
        assert!(!navigator.fire(&pending, &mut document));
        assert_eq!(document.scroll_calls().len(), calls);
    }

    #[test]
    fn missing_target_never_scrolls_to_top() {
        let mut navigator = Navigator::new(&SiteConfig::default());
        let mut document = document();
        let (mut history, initial) = MemoryHistory::open("/");
        navigator.commit(&initial, &mut document, None);
        document.scroll_to(700.0);
        let pending = navigator
            .commit(&history.push("/#stale-anchor", None), &mut document, None)
            .unwrap();
        assert!(!navigator.fire(&pending, &mut document));
        assert_eq!(document.scroll_position(), (0.0, 700.0));
    }

    #[test]
    fn article_mount_toggles_smooth_scrolling() {
        let mut navigator = Navigator::new(&SiteConfig::default());
        let mut document = document();
        let (mut history, initial) = MemoryHistory::open("/");
        navigator.commit(&initial, &mut document, None);
        assert!(!document.smooth_scrolling());
        navigator.commit(&history.push("/projects/transitmate_chatbot", None), &mut document, None);
        assert!(document.smooth_scrolling());
        navigator.commit(&history.push("/publications", None), &mut document, None);
        assert!(!document.smooth_scrolling());
    }

    /// Records document calls in order.
    #[derive(Default)]
    struct CallLog(Vec<String>);

    impl Document for CallLog {
        fn scroll_to_top(&mut self) {
            self.0.push("scroll_to_top".into());
        }

        fn scroll_into_view(&mut self, id: &str, _behavior: ScrollBehavior) -> bool {
            self.0.push(format!("scroll_into_view #{id}"));
            true
        }

        fn set_title(&mut self, _title: &str) {}

        fn replace_fragment(&mut self, id: &str) {
            self.0.push(format!("fragment #{id}"));
        }

        fn set_smooth_scrolling(&mut self, enabled: bool) {
            self.0.push(format!("smooth={enabled}"));
        }
    }

    #[test]
    fn entering_an_article_jumps_to_top_before_smooth_scrolling() {
        let mut navigator = Navigator::new(&SiteConfig::default());
        let mut log = CallLog::default();
        let (mut history, initial) = MemoryHistory::open("/");
        navigator.commit(&initial, &mut log, None);
        log.0.clear();

        navigator.commit(&history.push("/projects/transitmate_chatbot", None), &mut log, None);
        assert_eq!(log.0, ["scroll_to_top", "smooth=true"]);
    }

    #[test]
    fn article_to_article_jumps_with_smooth_scrolling_off() {
        let mut navigator = Navigator::new(&SiteConfig::default());
        let mut log = CallLog::default();
        let (mut history, initial) = MemoryHistory::open("/projects/transitmate_chatbot");
        navigator.commit(&initial, &mut log, None);
        log.0.clear();

        navigator.commit(&history.push("/translink-od", None), &mut log, None);
        assert_eq!(log.0, ["smooth=false", "scroll_to_top", "smooth=true"]);

        log.0.clear();
        navigator.commit(&history.push("/publications", None), &mut log, None);
        assert_eq!(log.0, ["smooth=false", "scroll_to_top"]);
    }

    #[test]
    fn alias_of_mounted_article_keeps_smooth_scrolling() {
        let mut navigator = Navigator::new(&SiteConfig::default());
        let mut log = CallLog::default();
        let (mut history, initial) = MemoryHistory::open("/translink-od");
        navigator.commit(&initial, &mut log, None);
        log.0.clear();

        navigator.commit(&history.push("/projects/translink_od", None), &mut log, None);
        assert_eq!(log.0, ["scroll_to_top"]);
    }
}
