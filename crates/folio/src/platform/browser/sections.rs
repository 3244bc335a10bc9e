use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use zoon::{Mutable, document};

use crate::sections::{IntersectionEntry, ReadingBand, SectionObserver};

type Callback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live `IntersectionObserver` over one page's section anchors.
///
/// Dropping the tracker disconnects the observer; callbacks still queued by
/// the browser then find a disconnected [`SectionObserver`] and do nothing.
pub struct SectionTracker {
    observer: IntersectionObserver,
    state: Rc<RefCell<SectionObserver>>,
    active: Mutable<Option<String>>,
    _callback: Callback,
}

impl SectionTracker {
    /// Observe the elements with the given ids and publish the active one
    /// into `active`. Ids without an element are skipped.
    pub fn observe<'a>(
        ids: impl IntoIterator<Item = &'a str>,
        band: ReadingBand,
        active: Mutable<Option<String>>,
    ) -> Option<Self> {
        let state = Rc::new(RefCell::new(SectionObserver::new()));

        let callback: Callback = Closure::new({
            let state = state.clone();
            let active = active.clone();
            move |entries: Array, _observer: IntersectionObserver| {
                let entries: Vec<IntersectionEntry> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry::new(entry.target().id(), entry.is_intersecting()))
                    .collect();
                let current = state.borrow_mut().on_entries(&entries).map(str::to_string);
                active.set_neq(current);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&band.root_margin());
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(error) => {
                log::warn!("IntersectionObserver unavailable: {error:?}");
                return None;
            }
        };

        let document = document();
        let mut observed = Vec::new();
        for id in ids {
            match document.get_element_by_id(id) {
                Some(element) => {
                    observer.observe(&element);
                    observed.push(id.to_string());
                }
                None => log::debug!("section #{id} not rendered, not observed"),
            }
        }
        state.borrow_mut().observe(observed);

        Some(Self {
            observer,
            state,
            active,
            _callback: callback,
        })
    }

    /// Id of the section currently in the reading band.
    pub fn active(&self) -> Mutable<Option<String>> {
        self.active.clone()
    }
}

impl Drop for SectionTracker {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.state.borrow_mut().disconnect();
    }
}
