use anyhow::{anyhow, Result};
use backend::KeyValueStorage;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `KeyValueStorage` over the browser's `window.localStorage`.
///
/// When local storage is unavailable (privacy mode, sandboxed iframe) every
/// call fails; the store then renders an empty list and saves report errors.
#[derive(Clone)]
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::error!("localStorage is not available; plants cannot be persisted");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| anyhow!("localStorage is not available"))
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(action: &str, key: &str, error: JsValue) -> anyhow::Error {
    anyhow!("failed to {} '{}': {:?}", action, key, error)
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| js_error("read", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // fails with QuotaExceededError when photos fill the quota
        self.storage()?
            .set_item(key, value)
            .map_err(|e| js_error("write", key, e))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| js_error("remove", key, e))
    }
}
