//! History API router.
//!
//! Every transition, from a link click or from `popstate`, goes through one
//! channel and is committed by a single task, so the navigator sees them in
//! order. Deferred scrolls sleep on zoon's `Timer` and are dropped by the
//! navigator when a newer transition has committed in the meantime.

use std::cell::RefCell;
use std::rc::Rc;

use futures_channel::mpsc;
use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use zoon::futures_util::StreamExt;
use zoon::{Mutable, Task, Timer, history, window};

use super::{BrowserDocument, GtagAnalytics};
use crate::config::SiteConfig;
use crate::effects::Analytics;
use crate::navigation::{
    ClickOutcome, Href, LinkOrigin, Location, LocationKey, NavigationIntent, NavigationType,
    Navigator, PendingScroll, Transition,
};
use crate::pages::Page;

const STATE_TARGET_ID: &str = "targetId";
const STATE_KEY: &str = "key";

struct Inner {
    navigator: RefCell<Navigator>,
    page: Mutable<Page>,
    location: Mutable<String>,
    transitions: mpsc::UnboundedSender<Transition>,
    _popstate: Closure<dyn Fn()>,
}

/// Cloneable handle to the running router.
#[derive(Clone)]
pub struct BrowserNavigation {
    inner: Rc<Inner>,
}

impl BrowserNavigation {
    /// Install the `popstate` listener and commit the loaded URL.
    pub fn start(config: &SiteConfig) -> Self {
        let (sender, mut receiver) = mpsc::unbounded::<Transition>();

        let popstate: Closure<dyn Fn()> = Closure::new({
            let sender = sender.clone();
            move || {
                let transition = Transition::new(current_location(), NavigationType::Pop);
                let _ = sender.unbounded_send(transition);
            }
        });
        if let Err(error) =
            window().add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
        {
            log::error!("failed to listen for popstate: {error:?}");
        }

        let load = Transition::load(current_location());
        // Re-tag the loaded entry with its key only, so neither this load
        // nor a later reload replays the intent it was pushed with.
        if let Err(error) = history().replace_state(&state_object(&load.location), "") {
            log::warn!("failed to tag the initial history entry: {error:?}");
        }

        let navigator = Navigator::new(config);
        let page = navigator.routes().page(&load.location.pathname);
        let this = Self {
            inner: Rc::new(Inner {
                navigator: RefCell::new(navigator),
                page: Mutable::new(page),
                location: Mutable::new(load.location.path_and_hash()),
                transitions: sender,
                _popstate: popstate,
            }),
        };

        let _ = this.inner.transitions.unbounded_send(load);

        let router = this.clone();
        Task::start(async move {
            while let Some(transition) = receiver.next().await {
                router.commit(transition);
            }
        });
        this
    }

    /// Mounted page.
    pub fn page(&self) -> Mutable<Page> {
        self.inner.page.clone()
    }

    /// Current `pathname + hash`.
    pub fn location(&self) -> Mutable<String> {
        self.inner.location.clone()
    }

    /// Handle a click on an in-app anchor. The caller prevents the default
    /// browser navigation.
    pub fn follow(&self, href: &str, origin: LinkOrigin) -> Option<ClickOutcome> {
        let href = match Href::parse(href) {
            Ok(href) => href,
            Err(error) => {
                log::warn!("{error}");
                return None;
            }
        };
        let outcome = self
            .inner
            .navigator
            .borrow()
            .click(&href, origin, &mut BrowserDocument);
        if let ClickOutcome::Navigate {
            to,
            intent,
            navigation_type,
        } = &outcome
        {
            self.navigate(to, intent.clone(), *navigation_type);
        }
        Some(outcome)
    }

    fn navigate(&self, path: &str, intent: Option<NavigationIntent>, navigation_type: NavigationType) {
        let location = Location::parse(path).with_state(intent);
        let state = state_object(&location);
        let url = location.path_and_hash();
        let result = match navigation_type {
            NavigationType::Replace => history().replace_state_with_url(&state, "", Some(&url)),
            _ => history().push_state_with_url(&state, "", Some(&url)),
        };
        if let Err(error) = result {
            log::error!("failed to {navigation_type:?} {url}: {error:?}");
            return;
        }
        let _ = self
            .inner
            .transitions
            .unbounded_send(Transition::new(location, navigation_type));
    }

    fn commit(&self, transition: Transition) {
        let mut analytics = GtagAnalytics::detect();
        let pending = {
            let mut navigator = self.inner.navigator.borrow_mut();
            let pending = navigator.commit(
                &transition,
                &mut BrowserDocument,
                analytics.as_mut().map(|gtag| gtag as &mut dyn Analytics),
            );
            if let Some(page) = navigator.page() {
                self.inner.page.set_neq(page);
            }
            pending
        };
        self.inner.location.set_neq(transition.location.path_and_hash());
        if let Some(pending) = pending {
            self.schedule(pending);
        }
    }

    fn schedule(&self, pending: PendingScroll) {
        let router = self.clone();
        Task::start(async move {
            Timer::sleep(pending.delay_ms).await;
            router
                .inner
                .navigator
                .borrow()
                .fire(&pending, &mut BrowserDocument);
        });
    }
}

fn state_object(location: &Location) -> JsValue {
    let state = Object::new();
    let _ = Reflect::set(&state, &STATE_KEY.into(), &location.key.as_str().into());
    if let Some(intent) = &location.state {
        let _ = Reflect::set(&state, &STATE_TARGET_ID.into(), &intent.target_id.as_str().into());
    }
    state.into()
}

fn state_string(state: &JsValue, field: &str) -> Option<String> {
    Reflect::get(state, &field.into())
        .ok()
        .and_then(|value| value.as_string())
}

/// Location of the active history entry, with its stored state.
fn current_location() -> Location {
    let location = window().location();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    let state = history().state().unwrap_or(JsValue::NULL);

    let mut current = Location::parse(&format!("{pathname}{hash}"));
    if state.is_object() {
        current.state = state_string(&state, STATE_TARGET_ID).map(NavigationIntent::new);
        if let Some(key) = state_string(&state, STATE_KEY) {
            current = current.with_key(LocationKey::from_raw(key));
        }
    }
    current
}
