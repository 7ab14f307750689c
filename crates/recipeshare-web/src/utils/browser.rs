//! Thin wrappers over blocking browser dialogs and the clipboard

use wasm_bindgen_futures::JsFuture;

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking `window.confirm`; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Address bar contents, used by the share action
pub fn current_url() -> Option<String> {
    web_sys::window().and_then(|window| window.location().href().ok())
}

/// Write `text` to the clipboard, resolving once the browser accepted it
///
/// Rejected on insecure origins and when clipboard permission is denied.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
