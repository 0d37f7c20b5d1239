//! Static preview server for the built site. Serves `SITE_DIR` with the
//! cache headers the offline worker expects.

mod config;
mod fixtures;

use std::path::Path;

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::EnvFilter;

use config::Config;
use fixtures::FixtureSummary;

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const NO_STORE: &str = "no-store";

fn cache_layer(value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, HeaderValue::from_static(value))
}

/// Build a cache-controlled static file router.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(cache_layer(cache_header))
}

/// Build the full application router.
///
/// Fixtures, the worker script and its wasm are always revalidated so a new
/// deploy is picked up. Everything else may be cached for a day. Unknown
/// paths fall back to `index.html`.
fn build_app(site_dir: &Path) -> Router {
    let worker_script = Router::new()
        .route_service("/sw.js", ServeFile::new(site_dir.join("sw.js")))
        .layer(cache_layer(NO_STORE));

    let shell = ServeDir::new(site_dir).fallback(ServeFile::new(site_dir.join("index.html")));

    Router::new()
        .nest("/data", cached_static_router(&site_dir.join("data"), NO_STORE))
        .nest(
            "/worker",
            cached_static_router(&site_dir.join("worker"), NO_STORE),
        )
        .merge(worker_script)
        .merge(
            Router::new()
                .fallback_service(shell)
                .layer(cache_layer(CACHE_1DAY)),
        )
        .layer(CompressionLayer::new())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    if let Err(e) = FixtureSummary::load(&config.site_dir) {
        tracing::warn!(site_dir = %config.site_dir.display(), "{e}");
    }

    let app = build_app(&config.site_dir);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, site_dir = %config.site_dir.display(), "Serving preview");
    axum::serve(listener, app).await
}
