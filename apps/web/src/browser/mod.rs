//! Browser-side implementations of the platform seams: export side effects,
//! timers and page-provided configuration.

mod export;
mod timer;

pub use export::BrowserHost;
pub use timer::BrowserSleep;

use std::borrow::Cow;
use wasm_bindgen::JsValue;
use web_sys::Document;

const CONFIG_META: &str = "meta[name=\"flagdeck-config\"]";

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Text of a thrown JS value, for error messages.
pub(crate) fn js_message(value: &JsValue) -> Cow<'static, str> {
    value.as_string().map_or_else(|| Cow::Owned(format!("{value:?}")), Cow::Owned)
}

/// TOML overrides embedded by the hosting page:
/// `<meta name="flagdeck-config" content="[search]&#10;debounce_ms = 0">`.
pub(crate) fn config_overrides() -> Option<String> {
    let meta = document()?.query_selector(CONFIG_META).ok()??;
    meta.get_attribute("content").filter(|content| !content.trim().is_empty())
}
