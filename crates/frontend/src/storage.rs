use gtts_shared::settings::KeyValueStore;

/// `window.localStorage`. Private browsing or a disabled store reads as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::debug!(key, "localStorage write rejected");
        }
    }
}
