//! Clipboard utilities for copying text to clipboard
//!
//! Thin async wrapper over the Web Clipboard API.

use wasm_bindgen_futures::JsFuture;

/// Copy text to the system clipboard
///
/// Resolves once the browser has accepted or rejected the write. The error
/// string is the debug form of the rejection (e.g. `NotAllowedError`).
pub async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
