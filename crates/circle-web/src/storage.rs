use circle_engine::{EngineError, MemoryStore, SessionStore};
use wasm_bindgen::JsValue;

/// `window.sessionStorage`: survives reloads, dies with the tab.
pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

impl BrowserSessionStore {
    pub fn open() -> Result<Self, EngineError> {
        let window = web_sys::window().ok_or_else(|| EngineError::Storage("no window".into()))?;
        let storage = window
            .session_storage()
            .map_err(js_error)?
            .ok_or_else(|| EngineError::Storage("sessionStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, EngineError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EngineError> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> EngineError {
    EngineError::Storage(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// The browser's session store, or an in-memory one if the page may not use it
/// (sandboxed iframes, some privacy modes).
pub fn open_session_store() -> Box<dyn SessionStore> {
    match BrowserSessionStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{e}; best score will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}
