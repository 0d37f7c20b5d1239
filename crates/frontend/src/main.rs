mod browser;
mod components;
mod geolocation;
mod loader;
mod pages;
mod state;
mod storage;

use dioxus::prelude::*;

// Published verbatim from `public/` so the offline worker can precache them.
const STYLESHEET: &str = "styles.css";
const WEB_MANIFEST: &str = "manifest.json";

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "manifest", href: WEB_MANIFEST }
        document::Stylesheet { href: STYLESHEET }
        pages::shell::Shell {}
    }
}

fn main() {
    // Routes `tracing` events to the browser console.
    let _ = dioxus::logger::init(tracing::Level::INFO);
    launch(App);
}
