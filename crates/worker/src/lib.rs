//! Offline service worker. The `sw.js` shim generated by the build script
//! loads this module and forwards the install, activate and fetch events to
//! the exports below.

use gtts_shared::offline::{self, FetchSource};
use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Cache, CacheStorage, Request, Response, ServiceWorkerGlobalScope};

/// Content-addressed name computed by the build script.
pub const CACHE_NAME: &str = env!("GTTS_CACHE_NAME");

fn scope() -> ServiceWorkerGlobalScope {
    js_sys::global().unchecked_into()
}

fn caches() -> Result<CacheStorage, JsValue> {
    scope().caches()
}

async fn resolve(promise: Promise) -> Result<JsValue, JsValue> {
    JsFuture::from(promise).await
}

/// Opens the current cache and fetches every shell asset and fixture into it.
/// Any failed fetch rejects the whole install.
#[wasm_bindgen]
pub async fn install() -> Result<(), JsValue> {
    let cache: Cache = resolve(caches()?.open(CACHE_NAME)).await?.unchecked_into();
    let manifest: Array = offline::precache_manifest()
        .into_iter()
        .map(JsValue::from)
        .collect();
    resolve(cache.add_all_with_str_sequence(&manifest)).await?;
    Ok(())
}

/// Deletes every cache left behind by earlier builds.
#[wasm_bindgen]
pub async fn activate() -> Result<(), JsValue> {
    let storage = caches()?;
    let keys: Array = resolve(storage.keys()).await?.unchecked_into();
    let keys: Vec<String> = keys.iter().filter_map(|k| k.as_string()).collect();
    for stale in offline::stale_caches(&keys, CACHE_NAME) {
        resolve(storage.delete(stale)).await?;
    }
    Ok(())
}

/// Cache-first lookup across all caches, falling through to the network.
#[wasm_bindgen]
pub async fn respond(request: Request) -> Result<Response, JsValue> {
    let cached = resolve(caches()?.match_with_request(&request)).await?;
    match offline::fetch_source(!cached.is_undefined()) {
        FetchSource::Cache => Ok(cached.unchecked_into()),
        FetchSource::Network => {
            let response = resolve(scope().fetch_with_request(&request)).await?;
            Ok(response.unchecked_into())
        }
    }
}
