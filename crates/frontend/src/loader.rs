use gtts_shared::error::{BrowserError, LoadError};
use gtts_shared::models::Fixture;
use gtts_shared::panel::Panel;
use gtts_shared::render;
use gtts_shared::route::Route;
use gtts_shared::settings::AppState;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Url;

use crate::browser;

/// Fixture paths are relative so the site works under any base path.
pub fn resolve_url(base: &str, path: &str) -> Result<Url, LoadError> {
    Url::parse(base)
        .and_then(|base| base.join(path))
        .map_err(|e| LoadError::Network {
            path: path.to_string(),
            message: e.to_string(),
        })
}

pub fn check_status(path: &str, status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Status {
            path: path.to_string(),
            status,
        })
    }
}

pub fn parse_fixture<T: Fixture>(body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Parse {
        path: T::PATH.to_string(),
        message: e.to_string(),
    })
}

/// Fetch a fixture relative to `base`, bypassing the HTTP cache so every
/// render sees the deployed file.
pub async fn load<T: Fixture>(base: &str) -> Result<T, LoadError> {
    let path = T::PATH;
    let network = |e: reqwest::Error| LoadError::Network {
        path: path.to_string(),
        message: e.to_string(),
    };

    let url = resolve_url(base, path)?;
    let resp = reqwest::Client::new()
        .get(url)
        .header(CACHE_CONTROL, "no-store")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .map_err(network)?;
    check_status(path, resp.status().as_u16())?;
    let body = resp.text().await.map_err(network)?;
    parse_fixture(&body)
}

async fn load_logged<T: Fixture>(base: &str) -> Result<T, LoadError> {
    let result = load::<T>(base).await;
    if let Err(err) = &result {
        tracing::warn!(%err, "fixture unavailable");
    }
    result
}

/// Produce the panel for `route`, fetching its fixture first when it has one.
/// Fixture failures become error cards; only a missing page location is an `Err`.
pub async fn load_panel(route: Route, state: &AppState) -> Result<Panel, BrowserError> {
    if route == Route::Navigator {
        return Ok(render::navigator(state));
    }
    let base = browser::page_url()?;
    let panel = match route {
        Route::Navigator => render::navigator(state),
        Route::Tolls => render::tolls(state, load_logged(&base).await),
        Route::Fuel => render::fuel(state, load_logged(&base).await),
        Route::Hotels => render::hotels(state, load_logged(&base).await),
        Route::Nearby => render::nearby(state, load_logged(&base).await),
    };
    Ok(panel)
}
