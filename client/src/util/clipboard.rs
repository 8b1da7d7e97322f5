//! Clipboard writes for the "Copy" coordinate action.

/// Write `text` to the system clipboard in the background.
///
/// `on_done` runs with `true` once the write succeeds and `false` if the
/// browser rejects it (no permission, insecure context, no clipboard API).
pub fn copy_text(text: String, on_done: impl FnOnce(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let promise = match clipboard_write(&text) {
            Ok(promise) => promise,
            Err(err) => {
                log::warn!("clipboard unavailable: {err:?}");
                on_done(false);
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => on_done(true),
                Err(err) => {
                    log::warn!("clipboard write rejected: {err:?}");
                    on_done(false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("clipboard write skipped outside the browser: {text}");
        on_done(false);
    }
}

/// Call `navigator.clipboard.writeText(text)`, returning its promise.
#[cfg(feature = "hydrate")]
fn clipboard_write(text: &str) -> Result<js_sys::Promise, wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("navigator.clipboard is undefined"));
    }
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()
}
