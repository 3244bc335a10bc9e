//! Scroll restoration: one decision per committed transition.
//!
//! Branches are evaluated in priority order:
//! 1. `Pop` defers to the browser's own restoration.
//! 2. A navigation intent scrolls to its target after the settle delay.
//! 3. A URL fragment scrolls to its target after the settle delay.
//! 4. Anything else scrolls to the top immediately.
//!
//! A missing target element makes branches 2 and 3 a no-op; they never
//! fall back to branch 4.

use serde::Serialize;

use super::{LocationKey, NavigationType, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollSource {
    Intent,
    Fragment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "branch", rename_all = "snake_case")]
pub enum ScrollDecision {
    DeferToBrowser,
    ScrollToElement {
        target_id: String,
        source: ScrollSource,
    },
    ScrollToTop,
    /// The transition was already evaluated.
    AlreadyHandled,
}

impl ScrollDecision {
    /// Priority-ordered branch selection. Pure in its inputs.
    pub fn for_transition(transition: &Transition) -> Self {
        if transition.navigation_type == NavigationType::Pop {
            return ScrollDecision::DeferToBrowser;
        }
        let location = &transition.location;
        if let Some(intent) = &location.state {
            return ScrollDecision::ScrollToElement {
                target_id: intent.target_id.clone(),
                source: ScrollSource::Intent,
            };
        }
        if let Some(id) = location.fragment_target() {
            return ScrollDecision::ScrollToElement {
                target_id: id.to_string(),
                source: ScrollSource::Fragment,
            };
        }
        ScrollDecision::ScrollToTop
    }
}

/// A scroll waiting for the destination page's layout to settle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingScroll {
    pub generation: u64,
    pub target_id: String,
    pub source: ScrollSource,
    pub delay_ms: u32,
}

#[derive(Debug)]
pub struct ScrollRestoration {
    settle_delay_ms: u32,
    /// Bumped by every new transition; pending scrolls from older
    /// generations are dropped.
    generation: u64,
    last_key: Option<LocationKey>,
}

impl ScrollRestoration {
    pub fn new(settle_delay_ms: u32) -> Self {
        Self {
            settle_delay_ms,
            generation: 0,
            last_key: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn settle_delay_ms(&self) -> u32 {
        self.settle_delay_ms
    }

    /// Decide once per transition key.
    pub fn on_transition(&mut self, transition: &Transition) -> ScrollDecision {
        let key = &transition.location.key;
        if self.last_key.as_ref() == Some(key) {
            return ScrollDecision::AlreadyHandled;
        }
        self.last_key = Some(key.clone());
        self.generation += 1;
        ScrollDecision::for_transition(transition)
    }

    /// Timer payload for an element scroll decided in the current generation.
    pub fn pending(&self, decision: &ScrollDecision) -> Option<PendingScroll> {
        match decision {
            ScrollDecision::ScrollToElement { target_id, source } => Some(PendingScroll {
                generation: self.generation,
                target_id: target_id.clone(),
                source: *source,
                delay_ms: self.settle_delay_ms,
            }),
            _ => None,
        }
    }

    pub fn is_live(&self, pending: &PendingScroll) -> bool {
        pending.generation == self.generation
    }
}
