//! localStorage Backend
//!
//! The `Storage` handle is looked up on every call rather than held, so the
//! backend stays `Send + Sync` for context.

use login_core::{KeyedSessionStore, StorageBackend, StoreError};
use wasm_bindgen::JsValue;

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

/// Session persisted in localStorage
pub type BrowserSessionStore = KeyedSessionStore<LocalStorage>;

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(js_error(e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_error(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(js_error(e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Write(js_error(e)))
    }
}
