use flagdeck::kernel::time::Sleep;
use js_sys::{Function, Promise};
use std::time::Duration;
use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// [`Sleep`] over `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleep;

impl Sleep for BrowserSleep {
    async fn sleep(&self, duration: Duration) {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);

        let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
            let scheduled = web_sys::window().map(|window| {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            });
            if !matches!(scheduled, Some(Ok(_))) {
                // No timer available: resolve right away instead of hanging forever.
                let _ = resolve.call0(&JsValue::NULL);
            }
        });

        if let Err(err) = JsFuture::from(promise).await {
            warn!(error = ?err, "Timer promise rejected");
        }
    }
}
