//! localStorage Session Store
//!
//! The browser keeps the session under the same two keys every other
//! front-end uses, so a login survives page reloads until logout.

use biopharm::session::{KeyValueStore, SessionError, SessionResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Session store over `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> SessionResult<Storage> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| SessionError::Unavailable("localStorage disabled".to_string()))
    }
}

fn js_error(value: JsValue) -> SessionError {
    SessionError::Unavailable(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> SessionResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&mut self, key: &str) -> SessionResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
