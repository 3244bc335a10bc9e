//! Active-section tracking for long article pages.
//!
//! Intersection reports (from the browser's observer, or computed
//! geometrically by the headless platform) are turned into discrete
//! [`SectionEvent`]s and folded into the active section by a single
//! reducer. Nothing else writes the active section.

use serde::{Deserialize, Serialize};

/// One table-of-contents entry and the DOM anchor it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

impl SectionDescriptor {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Vertical strip of the viewport in which a section counts as active.
///
/// Percentages shrink the viewport from the top and from the bottom,
/// like an `IntersectionObserver` root margin of `-top% 0px -bottom% 0px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingBand {
    pub top_percent: f64,
    pub bottom_percent: f64,
}

impl Default for ReadingBand {
    fn default() -> Self {
        Self {
            top_percent: 20.0,
            bottom_percent: 35.0,
        }
    }
}

impl ReadingBand {
    pub fn root_margin(&self) -> String {
        format!("-{}% 0px -{}% 0px", self.top_percent, self.bottom_percent)
    }

    /// Band bounds in viewport coordinates, `[top, bottom)`.
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        let top = viewport_height * self.top_percent / 100.0;
        let bottom = viewport_height - viewport_height * self.bottom_percent / 100.0;
        (top, bottom.max(top))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionEvent {
    Activated(String),
}

/// Owns the active-section state of one mounted page.
#[derive(Debug, Default)]
pub struct SectionObserver {
    observed: Vec<String>,
    active: Option<String>,
    connected: bool,
}

impl SectionObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register section anchors. Connects the observer.
    pub fn observe<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connected = true;
        for id in ids {
            let id = id.into();
            if !self.observed.contains(&id) {
                self.observed.push(id);
            }
        }
    }

    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Stop observing. Later batches are ignored.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.observed.clear();
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Translate one callback batch into events and reduce them in order.
    ///
    /// When several sections intersect in the same batch the last one wins.
    /// Non-intersecting entries never clear the active section.
    pub fn on_entries(&mut self, entries: &[IntersectionEntry]) -> Option<&str> {
        if !self.connected {
            return self.active();
        }
        let events: Vec<SectionEvent> = entries
            .iter()
            .filter(|entry| entry.is_intersecting && self.observed.contains(&entry.id))
            .map(|entry| SectionEvent::Activated(entry.id.clone()))
            .collect();
        for event in events {
            self.reduce(event);
        }
        self.active()
    }

    fn reduce(&mut self, event: SectionEvent) {
        match event {
            SectionEvent::Activated(id) => {
                if self.active.as_deref() != Some(id.as_str()) {
                    log::debug!("active section -> {id}");
                }
                self.active = Some(id);
            }
        }
    }
}

/// Section geometry in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionLayout {
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }

    /// Half-open overlap with `[top, bottom)`.
    pub fn overlaps(&self, top: f64, bottom: f64) -> bool {
        self.top < bottom && self.bottom > top
    }
}

/// Intersection state of every section against the reading band.
pub fn intersections(
    layout: &[SectionLayout],
    band: ReadingBand,
    scroll_y: f64,
    viewport_height: f64,
) -> Vec<IntersectionEntry> {
    let (band_top, band_bottom) = band.bounds(viewport_height);
    let (top, bottom) = (scroll_y + band_top, scroll_y + band_bottom);
    layout
        .iter()
        .map(|section| IntersectionEntry::new(section.id.clone(), section.overlaps(top, bottom)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

pub fn toc_entries(sections: &[SectionDescriptor], active: Option<&str>) -> Vec<TocEntry> {
    sections
        .iter()
        .map(|section| TocEntry {
            id: section.id,
            label: section.label,
            href: format!("#{}", section.id),
            active: active == Some(section.id),
        })
        .collect()
}
