//! Clipboard helpers over the async Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copies `text` and runs `on_done` with the outcome once the browser settles
/// the write. Errors carry the JS rejection rendered as a string.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_done(Err("No window object".to_string()));
            return;
        };
        let clipboard = window.navigator().clipboard();
        let result = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .map(|_| ())
            .map_err(|e| format!("Clipboard write rejected: {:?}", e));
        on_done(result);
    });
}
