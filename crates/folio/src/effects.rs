//! Side-effect boundary.
//!
//! Title, scroll position and analytics are process-wide browser state.
//! The core only touches them through these traits, so the browser layer
//! and the headless document are interchangeable.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

pub trait Document {
    /// Jump to `(0, 0)`.
    fn scroll_to_top(&mut self);

    /// Scroll the element with `id` into view. Returns `false`, without
    /// scrolling, when no such element is attached.
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool;

    fn set_title(&mut self, title: &str);

    /// Replace the URL fragment of the current history entry, keeping its
    /// navigation state.
    fn replace_fragment(&mut self, id: &str);

    /// Toggle smooth scrolling for the whole document.
    fn set_smooth_scrolling(&mut self, enabled: bool);
}

/// Optional page-view collector.
pub trait Analytics {
    fn page_view(&mut self, measurement_id: &str, page_path: &str);
}
