//! Inline Page Configuration
//!
//! Reads `<script id="app-config" type="application/json">` from the host
//! page. Missing blob means defaults.

use login_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

/// Config from the page, plus a parse error to report once logging is up
pub fn load_config() -> (AppConfig, Option<String>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return (AppConfig::default(), None);
    };

    match AppConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e.to_string())),
    }
}
