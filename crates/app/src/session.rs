use client::SessionStore;
use dioxus::prelude::*;
use shared_types::AppError;

/// [`SessionStore`] over the webview's `window.localStorage`.
///
/// Must be used from inside the Dioxus runtime, since every call goes
/// through `document::eval`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSessionStore;

/// Encode a Rust string as a JS string literal.
fn js_string(value: &str) -> Result<String, AppError> {
    Ok(serde_json::to_string(value)?)
}

impl SessionStore for BrowserSessionStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let script = format!("return window.localStorage.getItem({});", js_string(key)?);
        document::eval(&script)
            .join::<Option<String>>()
            .await
            .map_err(|e| AppError::storage(format!("localStorage read failed: {e}")))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let script = format!(
            "window.localStorage.setItem({}, {}); return true;",
            js_string(key)?,
            js_string(value)?
        );
        document::eval(&script)
            .join::<bool>()
            .await
            .map(|_| ())
            .map_err(|e| AppError::storage(format!("localStorage write failed: {e}")))
    }
}
