//! Thin wrappers over the page's window. None of these fail loudly: a
//! missing API is logged and treated as a no-op.

use gtts_shared::error::BrowserError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const WORKER_SCRIPT: &str = "sw.js";

pub fn platform_locale() -> Option<String> {
    web_sys::window()?.navigator().language()
}

pub fn location_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn set_location_fragment(fragment: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_hash(fragment) {
        tracing::warn!(?err, fragment, "failed to write URL fragment");
    }
}

pub fn page_url() -> Result<String, BrowserError> {
    web_sys::window()
        .ok_or(BrowserError::Unavailable("window"))?
        .location()
        .href()
        .map_err(|_| BrowserError::Unavailable("window.location"))
}

/// Set `<html lang>` so assistive tech and hyphenation follow the selection.
pub fn set_document_lang(code: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("lang", code);
    }
}

/// Invoke `on_change` for every `hashchange` for the lifetime of the page.
pub fn listen_fragment_changes(mut on_change: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(move || on_change());
    if let Err(err) =
        window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
    {
        tracing::error!(?err, "failed to listen for hashchange");
    }
    closure.forget();
}

/// `navigator.clipboard` is absent outside secure contexts; that case is an
/// `Err` rather than a throw from inside the binding.
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(JsValue::NULL)?;
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }
    let promise = clipboard.unchecked_into::<web_sys::Clipboard>().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}

/// Blocking fallback when the clipboard is unavailable.
pub fn prompt(message: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.prompt_with_message_and_default(message, value);
    }
}

pub fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().service_worker().register(WORKER_SCRIPT);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => tracing::debug!("offline worker registered"),
            Err(err) => tracing::info!(?err, "offline worker not registered"),
        }
    });
}
