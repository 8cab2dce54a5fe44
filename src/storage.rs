use crate::core::{KeyValueStore, MemoryStore};
use std::rc::Rc;
use web_sys as web;

/// `window.localStorage`, scoped to the page origin.
pub struct LocalStorage {
    storage: web::Storage,
}

impl LocalStorage {
    pub fn open() -> Option<Self> {
        let window = web::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                log::warn!("[prefs] localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::warn!("[prefs] could not persist {}: {:?}", key, e);
        }
    }
}

/// Browser storage when we can get it, otherwise an in-memory stand-in so
/// preferences still work for the current session.
pub fn open_store() -> Rc<dyn KeyValueStore> {
    match LocalStorage::open() {
        Some(s) => Rc::new(s),
        None => {
            log::info!("[prefs] using in-memory preferences");
            Rc::new(MemoryStore::new())
        }
    }
}
