//! Thin wrapper over `window.localStorage`

use tracing::warn;
use wasm_bindgen::JsValue;

/// Storage key of the persisted session payload
pub const SESSION_KEY: &str = "nitrosubs.session";

fn local_storage() -> Option<web_sys::Storage> {
    // No browser storage off wasm (server builds, native tests)
    if !cfg!(target_family = "wasm") {
        return None;
    }
    web_sys::window()?.local_storage().ok().flatten()
}

fn log_failure(action: &str, key: &str, error: JsValue) {
    warn!(key, error = ?error, "localStorage {} failed", action);
}

pub fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            log_failure("write", key, e);
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(key) {
            log_failure("remove", key, e);
        }
    }
}

/// Toggle the `dark` class on `<html>`
pub fn apply_theme_class(dark: bool) {
    if !cfg!(target_family = "wasm") {
        return;
    }
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        warn!(error = ?e, "failed to apply theme class");
    }
}
