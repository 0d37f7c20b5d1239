//! Offline precache manifest and cache naming for the service worker.

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use crate::models::FIXTURE_PATHS;

pub const CACHE_PREFIX: &str = "gtts-cache-";

/// App shell files, relative to the worker scope.
pub const SHELL_ASSETS: [&str; 6] = [
    "./",
    "./index.html",
    "./styles.css",
    "./manifest.json",
    "./wasm/gtts-frontend.js",
    "./wasm/gtts-frontend_bg.wasm",
];

/// Everything fetched into the cache on install: shell first, then fixtures.
pub fn precache_manifest() -> Vec<String> {
    SHELL_ASSETS
        .iter()
        .map(|s| s.to_string())
        .chain(FIXTURE_PATHS.iter().map(|p| format!("./{p}")))
        .collect()
}

/// Cache name derived from the published content, so any change to a
/// precached file rolls the cache over on the next visit.
pub fn cache_name<'a>(contents: impl IntoIterator<Item = &'a [u8]>) -> String {
    let mut hasher = DefaultHasher::new();
    for chunk in contents {
        hasher.write_usize(chunk.len());
        hasher.write(chunk);
    }
    format!("{CACHE_PREFIX}{:016x}", hasher.finish())
}

/// Caches to delete on activation: everything except `current`.
pub fn stale_caches<'a>(keys: &'a [String], current: &str) -> Vec<&'a str> {
    keys.iter()
        .map(String::as_str)
        .filter(|k| *k != current)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    Cache,
    Network,
}

/// Cache-first. Network responses are never written back to the cache.
pub fn fetch_source(cache_hit: bool) -> FetchSource {
    if cache_hit {
        FetchSource::Cache
    } else {
        FetchSource::Network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_lists_shell_and_fixtures() {
        let manifest = precache_manifest();
        assert_eq!(manifest.len(), 10);
        assert_eq!(manifest[0], "./");
        assert!(manifest.contains(&"./data/toll_demo.json".to_string()));
        assert!(manifest.contains(&"./data/pois.json".to_string()));
        assert!(manifest.contains(&"./styles.css".to_string()));
    }

    #[test]
    fn test_cache_name_is_content_addressed() {
        let a = cache_name([b"one".as_slice(), b"two".as_slice()]);
        let b = cache_name([b"one".as_slice(), b"two".as_slice()]);
        let c = cache_name([b"one".as_slice(), b"tw0".as_slice()]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with(CACHE_PREFIX));
        assert_eq!(a.len(), CACHE_PREFIX.len() + 16);
    }

    #[test]
    fn test_cache_name_respects_chunk_boundaries() {
        let a = cache_name([b"ab".as_slice(), b"c".as_slice()]);
        let b = cache_name([b"a".as_slice(), b"bc".as_slice()]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_stale_caches_keep_only_current() {
        let keys = vec![
            "gtts-cache-v3".to_string(),
            "gtts-cache-0011".to_string(),
            "other".to_string(),
        ];
        assert_eq!(
            stale_caches(&keys, "gtts-cache-0011"),
            vec!["gtts-cache-v3", "other"]
        );
        assert!(stale_caches(&keys[1..2], "gtts-cache-0011").is_empty());
    }

    #[test]
    fn test_fetch_source_is_cache_first() {
        assert_eq!(fetch_source(true), FetchSource::Cache);
        assert_eq!(fetch_source(false), FetchSource::Network);
    }
}
