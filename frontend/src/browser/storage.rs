//! `localStorage` / `sessionStorage` as a [`KeyValueBackend`].

use common::error::StoreError;
use common::store::{KeyValueBackend, MemoryBackend};
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

pub enum BrowserBackend {
    Web {
        storage: Storage,
        area: &'static str,
    },
    /// Used when the browser refuses storage access; data lasts one page load.
    Memory(MemoryBackend),
}

impl BrowserBackend {
    pub fn local() -> Result<Self, StoreError> {
        Self::open("localStorage", Window::local_storage)
    }

    pub fn session() -> Result<Self, StoreError> {
        Self::open("sessionStorage", Window::session_storage)
    }

    pub fn memory() -> Self {
        BrowserBackend::Memory(MemoryBackend::new())
    }

    fn open(
        area: &'static str,
        get: fn(&Window) -> Result<Option<Storage>, JsValue>,
    ) -> Result<Self, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable(format!("{area}: no window")))?;
        match get(&window) {
            Ok(Some(storage)) => Ok(BrowserBackend::Web { storage, area }),
            Ok(None) => Err(StoreError::Unavailable(format!("{area} is disabled"))),
            Err(err) => Err(StoreError::Unavailable(format!(
                "{area}: {}",
                js_reason(&err)
            ))),
        }
    }
}

impl KeyValueBackend for BrowserBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            BrowserBackend::Web { storage, area } => {
                storage.get_item(key).map_err(|err| StoreError::Read {
                    key: format!("{area}.{key}"),
                    reason: js_reason(&err),
                })
            }
            BrowserBackend::Memory(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserBackend::Web { storage, area } => {
                storage.set_item(key, value).map_err(|err| StoreError::Write {
                    key: format!("{area}.{key}"),
                    reason: js_reason(&err),
                })
            }
            BrowserBackend::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match self {
            BrowserBackend::Web { storage, area } => {
                storage.remove_item(key).map_err(|err| StoreError::Write {
                    key: format!("{area}.{key}"),
                    reason: js_reason(&err),
                })
            }
            BrowserBackend::Memory(memory) => memory.remove(key),
        }
    }
}

/// Best-effort text for a thrown JS value (usually a `DOMException`).
fn js_reason(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}
