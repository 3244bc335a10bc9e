//! Headless platform: a virtual document, an in-memory history and a
//! virtual clock driving the navigation core.
//!
//! Used by the CLI `simulate` command and by the integration tests.

pub mod clock;

use std::collections::HashMap;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::effects::{Analytics, Document, ScrollBehavior};
use crate::error::Result;
use crate::navigation::{
    ClickOutcome, Href, LinkOrigin, LocationKey, MemoryHistory, NavigationType, Navigator,
    PendingScroll, Transition,
};
use crate::pages::Page;
use crate::sections::{IntersectionEntry, ReadingBand, SectionLayout, SectionObserver, intersections};

pub use clock::VirtualClock;

/// Top of the first section on every page (below the fixed header).
const HEADER_HEIGHT: f64 = 80.0;
const SECTION_HEIGHT: f64 = 900.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum ScrollCall {
    Top,
    IntoView { id: String, behavior: ScrollBehavior },
}

/// Document with section geometry, a scroll offset and a title.
#[derive(Debug)]
pub struct HeadlessDocument {
    viewport_height: f64,
    scroll_y: f64,
    layouts: HashMap<Page, Vec<SectionLayout>>,
    shown: Option<Page>,
    title: String,
    fragment: Option<String>,
    smooth_scrolling: bool,
    scroll_calls: Vec<ScrollCall>,
    reported: HashMap<String, bool>,
}

impl HeadlessDocument {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_y: 0.0,
            layouts: HashMap::new(),
            shown: None,
            title: String::new(),
            fragment: None,
            smooth_scrolling: false,
            scroll_calls: Vec::new(),
            reported: HashMap::new(),
        }
    }

    /// Document with every page's sections stacked under the header.
    pub fn with_site_layout(viewport_height: f64) -> Self {
        [
            Page::Home,
            Page::BrisbaneConnectivity,
            Page::TranslinkOd,
            Page::TransitmateChatbot,
            Page::FeatureEngineering,
        ]
        .into_iter()
        .fold(Self::new(viewport_height), |document, page| {
            document.with_page_layout(page, HEADER_HEIGHT, SECTION_HEIGHT)
        })
    }

    /// Register `page`'s sections stacked from `first_top`, each
    /// `section_height` tall. The first registered page is shown.
    pub fn with_page_layout(mut self, page: Page, first_top: f64, section_height: f64) -> Self {
        let layout = page
            .sections()
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let top = first_top + section_height * index as f64;
                SectionLayout::new(section.id, top, top + section_height)
            })
            .collect();
        self.layouts.insert(page, layout);
        if self.shown.is_none() {
            self.shown = Some(page);
        }
        self
    }

    /// Swap the attached elements for `page`'s.
    pub fn show(&mut self, page: Page) {
        self.shown = Some(page);
        self.reported.clear();
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    pub fn shown(&self) -> Option<Page> {
        self.shown
    }

    fn elements(&self) -> &[SectionLayout] {
        self.shown
            .and_then(|page| self.layouts.get(&page))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn document_height(&self) -> f64 {
        self.elements()
            .iter()
            .map(|element| element.bottom)
            .fold(self.viewport_height, f64::max)
    }

    fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// User scroll (wheel, keyboard). Not recorded as a scroll call.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    pub fn scroll_position(&self) -> (f64, f64) {
        (0.0, self.scroll_y)
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Whether any part of the element is inside the viewport.
    pub fn is_in_view(&self, id: &str) -> bool {
        self.elements()
            .iter()
            .find(|element| element.id == id)
            .is_some_and(|element| element.overlaps(self.scroll_y, self.scroll_y + self.viewport_height))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn smooth_scrolling(&self) -> bool {
        self.smooth_scrolling
    }

    /// Programmatic scrolls, in call order.
    pub fn scroll_calls(&self) -> &[ScrollCall] {
        &self.scroll_calls
    }

    /// Intersection entries whose state changed since the last report.
    /// The first report after [`show`](Self::show) includes every element.
    pub fn intersection_changes(&mut self, band: ReadingBand) -> Vec<IntersectionEntry> {
        let current = intersections(self.elements(), band, self.scroll_y, self.viewport_height);
        current
            .into_iter()
            .filter(|entry| {
                let previous = self.reported.insert(entry.id.clone(), entry.is_intersecting);
                previous != Some(entry.is_intersecting)
            })
            .collect()
    }
}

impl Document for HeadlessDocument {
    fn scroll_to_top(&mut self) {
        self.scroll_y = 0.0;
        self.scroll_calls.push(ScrollCall::Top);
    }

    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool {
        let Some(top) = self
            .elements()
            .iter()
            .find(|element| element.id == id)
            .map(|element| element.top)
        else {
            return false;
        };
        self.scroll_y = top.clamp(0.0, self.max_scroll());
        self.scroll_calls.push(ScrollCall::IntoView {
            id: id.to_string(),
            behavior,
        });
        true
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn replace_fragment(&mut self, id: &str) {
        self.fragment = Some(id.to_string());
    }

    fn set_smooth_scrolling(&mut self, enabled: bool) {
        self.smooth_scrolling = enabled;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub measurement_id: String,
    pub page_path: String,
}

/// Collector that records page views.
#[derive(Debug, Default)]
pub struct HeadlessAnalytics {
    page_views: Vec<PageView>,
}

impl HeadlessAnalytics {
    pub fn page_views(&self) -> &[PageView] {
        &self.page_views
    }
}

impl Analytics for HeadlessAnalytics {
    fn page_view(&mut self, measurement_id: &str, page_path: &str) {
        self.page_views.push(PageView {
            measurement_id: measurement_id.to_string(),
            page_path: page_path.to_string(),
        });
    }
}

/// A browsing session against the headless document.
#[derive(Debug)]
pub struct HeadlessSession {
    navigator: Navigator,
    history: MemoryHistory,
    document: HeadlessDocument,
    analytics: HeadlessAnalytics,
    clock: VirtualClock<PendingScroll>,
    sections: SectionObserver,
    config: SiteConfig,
    band: ReadingBand,
    /// Scroll offsets the browser remembers per history entry.
    saved_scroll: HashMap<LocationKey, f64>,
}

impl HeadlessSession {
    /// Load `path_and_hash` as a typed URL.
    pub fn open(config: &SiteConfig, path_and_hash: &str, viewport_height: f64) -> Self {
        let (history, initial) = MemoryHistory::open(path_and_hash);
        let mut session = Self {
            navigator: Navigator::new(config),
            history,
            document: HeadlessDocument::with_site_layout(viewport_height),
            analytics: HeadlessAnalytics::default(),
            clock: VirtualClock::new(),
            sections: SectionObserver::new(),
            config: config.clone(),
            band: config.reading_band,
            saved_scroll: HashMap::new(),
        };
        session.commit(initial);
        session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    pub fn document(&self) -> &HeadlessDocument {
        &self.document
    }

    pub fn analytics(&self) -> &HeadlessAnalytics {
        &self.analytics
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.sections.active()
    }

    pub fn click(&mut self, href: &str, origin: LinkOrigin) -> Result<ClickOutcome> {
        let href = Href::parse(href)?;
        let outcome = self.navigator.click(&href, origin, &mut self.document);
        match &outcome {
            ClickOutcome::ScrollInPage {
                target_id,
                rewrite_fragment: true,
            } => {
                self.history.replace_fragment(target_id);
                self.refresh_sections();
            }
            ClickOutcome::ScrollInPage { .. } => self.refresh_sections(),
            ClickOutcome::Navigate {
                to,
                intent,
                navigation_type,
            } => {
                let transition = match navigation_type {
                    NavigationType::Replace => self.history.replace(to, intent.clone()),
                    _ => self.history.push(to, intent.clone()),
                };
                self.commit(transition);
            }
        }
        Ok(outcome)
    }

    /// Browser back button. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        match self.history.back() {
            Some(transition) => {
                self.commit(transition);
                true
            }
            None => false,
        }
    }

    pub fn forward(&mut self) -> bool {
        match self.history.forward() {
            Some(transition) => {
                self.commit(transition);
                true
            }
            None => false,
        }
    }

    /// Browser reload: the app starts over on the current entry and timers
    /// from the old page never fire.
    pub fn reload(&mut self) {
        self.remember_scroll();
        self.clock.clear();
        self.navigator = Navigator::new(&self.config);
        let transition = self.history.reload();
        self.commit(transition);
    }

    /// User scroll.
    pub fn scroll_to(&mut self, y: f64) {
        self.document.scroll_to(y);
        self.refresh_sections();
    }

    /// Advance virtual time, firing due scrolls. Returns how many scrolled.
    pub fn advance(&mut self, ms: u64) -> usize {
        let fired = self.clock.advance_by(ms);
        let scrolled = fired
            .iter()
            .filter(|pending| self.navigator.fire(pending, &mut self.document))
            .count();
        self.refresh_sections();
        scrolled
    }

    /// Run every pending timer.
    pub fn settle(&mut self) -> usize {
        let mut scrolled = 0;
        while let Some(wait) = self.clock.time_to_next() {
            scrolled += self.advance(wait);
        }
        scrolled
    }

    fn commit(&mut self, transition: Transition) {
        self.remember_scroll();
        let previous = self.navigator.page();
        let pending = self
            .navigator
            .commit(&transition, &mut self.document, Some(&mut self.analytics));

        if let Some(page) = self.navigator.page().filter(|page| previous != Some(*page)) {
            self.document.show(page);
            self.sections.disconnect();
            self.sections = SectionObserver::new();
            if page.is_article() {
                self.sections
                    .observe(page.sections().iter().map(|section| section.id));
            }
        }

        if transition.navigation_type == NavigationType::Pop {
            // Browser-native restoration, not a programmatic scroll.
            if let Some(y) = self.saved_scroll.get(&transition.location.key) {
                self.document.scroll_to(*y);
            }
        }

        if let Some(pending) = pending {
            let delay_ms = pending.delay_ms;
            self.clock.schedule(pending, delay_ms);
        }
        self.refresh_sections();
    }

    fn remember_scroll(&mut self) {
        if let Some(location) = self.navigator.location() {
            self.saved_scroll
                .insert(location.key.clone(), self.document.scroll_position().1);
        }
    }

    fn refresh_sections(&mut self) {
        let entries = self.document.intersection_changes(self.band);
        if !entries.is_empty() {
            self.sections.on_entries(&entries);
        }
    }
}
