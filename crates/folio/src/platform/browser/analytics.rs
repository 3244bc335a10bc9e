use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use zoon::window;

use crate::effects::Analytics;

/// The global `gtag` function installed by the Google tag snippet.
#[derive(Debug, Clone)]
pub struct GtagAnalytics {
    gtag: Function,
}

impl GtagAnalytics {
    /// `None` when the page has no `gtag` (blocked or not loaded).
    pub fn detect() -> Option<Self> {
        let gtag = Reflect::get(&window(), &JsValue::from_str("gtag")).ok()?;
        let gtag = gtag.dyn_into::<Function>().ok()?;
        Some(Self { gtag })
    }
}

impl Analytics for GtagAnalytics {
    fn page_view(&mut self, measurement_id: &str, page_path: &str) {
        let params = Object::new();
        if Reflect::set(&params, &"page_path".into(), &page_path.into()).is_err() {
            return;
        }
        let result = self.gtag.call3(
            &JsValue::UNDEFINED,
            &"config".into(),
            &measurement_id.into(),
            &params,
        );
        if let Err(error) = result {
            log::warn!("gtag page view failed: {error:?}");
        }
    }
}
