use web_sys::{ScrollBehavior as DomScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use zoon::{document, history, window};

use crate::effects::{Document, ScrollBehavior};

/// The page's `window.document`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDocument;

impl BrowserDocument {
    /// Lock or release `body` scrolling (open mobile menu).
    pub fn lock_body_scroll(&self, locked: bool) {
        let Some(body) = document().body() else {
            return;
        };
        let overflow = if locked { "hidden" } else { "unset" };
        if let Err(error) = body.style().set_property("overflow", overflow) {
            log::warn!("failed to set body overflow: {error:?}");
        }
    }
}

impl Document for BrowserDocument {
    fn scroll_to_top(&mut self) {
        // Instant even while the document has `scroll-behavior: smooth`.
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(DomScrollBehavior::Instant);
        window().scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool {
        let Some(element) = document().get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => DomScrollBehavior::Instant,
            ScrollBehavior::Smooth => DomScrollBehavior::Smooth,
        });
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn set_title(&mut self, title: &str) {
        document().set_title(title);
    }

    fn replace_fragment(&mut self, id: &str) {
        let history = history();
        let state = history.state().unwrap_or(wasm_bindgen::JsValue::NULL);
        if let Err(error) = history.replace_state_with_url(&state, "", Some(&format!("#{id}"))) {
            log::warn!("failed to rewrite fragment to #{id}: {error:?}");
        }
    }

    fn set_smooth_scrolling(&mut self, enabled: bool) {
        let Some(root) = document().document_element() else {
            return;
        };
        let Ok(root) = wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(root) else {
            return;
        };
        let value = if enabled { "smooth" } else { "auto" };
        if let Err(error) = root.style().set_property("scroll-behavior", value) {
            log::warn!("failed to set scroll-behavior: {error:?}");
        }
    }
}
