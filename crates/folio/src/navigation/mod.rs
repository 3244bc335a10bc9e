//! Client-side navigation: link clicks, history transitions and the
//! scroll behavior each transition commits to.

pub mod history;
pub mod href;
pub mod intent;
pub mod navigator;
pub mod restoration;

use std::fmt;

use serde::Serialize;
use ulid::Ulid;

pub use history::MemoryHistory;
pub use href::Href;
pub use intent::{ClickOutcome, IntentResolver, LinkOrigin};
pub use navigator::Navigator;
pub use restoration::{PendingScroll, ScrollDecision, ScrollRestoration, ScrollSource};

/// How the history stack moved to the new location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NavigationType {
    Push,
    Replace,
    /// Browser back/forward.
    Pop,
}

/// One-shot scroll target carried in a transition's navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationIntent {
    pub target_id: String,
}

impl NavigationIntent {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }
}

/// Identity of one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LocationKey(String);

impl LocationKey {
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub pathname: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
    pub state: Option<NavigationIntent>,
    pub key: LocationKey,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            hash: String::new(),
            state: None,
            key: LocationKey::generate(),
        }
    }

    /// Split `"/path#fragment"` into pathname and hash.
    pub fn parse(path_and_hash: &str) -> Self {
        let mut location = match path_and_hash.split_once('#') {
            Some((path, fragment)) => {
                let mut location = Self::new(path);
                if !fragment.is_empty() {
                    location.hash = format!("#{fragment}");
                }
                location
            }
            None => Self::new(path_and_hash),
        };
        if location.pathname.is_empty() {
            location.pathname = crate::routes::HOME_PATH.to_string();
        }
        location
    }

    pub fn with_state(mut self, state: Option<NavigationIntent>) -> Self {
        self.state = state;
        self
    }

    pub fn with_key(mut self, key: LocationKey) -> Self {
        self.key = key;
        self
    }

    /// Element id named by the URL fragment, if any.
    pub fn fragment_target(&self) -> Option<&str> {
        self.hash.strip_prefix('#').filter(|id| !id.is_empty())
    }

    pub fn path_and_hash(&self) -> String {
        format!("{}{}", self.pathname, self.hash)
    }
}

/// A committed route/hash/state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub location: Location,
    pub navigation_type: NavigationType,
}

impl Transition {
    pub fn new(location: Location, navigation_type: NavigationType) -> Self {
        Self {
            location,
            navigation_type,
        }
    }

    /// A page load or reload of `location`: a `Push` with any stored
    /// navigation state dropped, so an intent is never used twice.
    pub fn load(location: Location) -> Self {
        Self::new(location.with_state(None), NavigationType::Push)
    }
}
