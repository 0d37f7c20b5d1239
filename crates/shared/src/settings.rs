//! The two persisted settings and the in-memory application state built from them.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::i18n::{self, Translator};
use crate::models::Coordinate;

pub const KEY_LANG: &str = "gtts_lang";
pub const KEY_POS: &str = "gtts_pos";

/// Per-browser key/value storage. Implementations must never fail: a broken
/// store reads as empty and ignores writes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Store backed by a map, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Everything a renderer depends on besides fixture data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub language: Translator,
    pub position: Option<Coordinate>,
}

impl AppState {
    /// Restore persisted settings, detecting the language on first run.
    pub fn load(store: &impl KeyValueStore, platform_locale: Option<&str>) -> Self {
        let saved = store.get(KEY_LANG);
        let code = i18n::resolve_language(saved.as_deref(), platform_locale);
        AppState {
            language: Translator::new(code),
            position: load_position(store),
        }
    }

    pub fn set_language(&mut self, store: &impl KeyValueStore, code: &str) {
        self.language = Translator::new(code);
        store.set(KEY_LANG, self.language.code());
    }

    pub fn set_position(&mut self, store: &impl KeyValueStore, position: Coordinate) {
        if let Ok(json) = serde_json::to_string(&position) {
            store.set(KEY_POS, &json);
        }
        self.position = Some(position);
    }
}

/// Unparseable stored positions read as absent.
pub fn load_position(store: &impl KeyValueStore) -> Option<Coordinate> {
    let raw = store.get(KEY_POS)?;
    serde_json::from_str(&raw).ok()
}
