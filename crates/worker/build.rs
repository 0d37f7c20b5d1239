use std::fs;
use std::path::{Path, PathBuf};

use gtts_shared::offline::cache_name;

const WATCHED: [&str; 2] = ["../frontend/public", "../frontend/src"];

/// Outputs of this build. Never part of the hash.
const SKIPPED: [&str; 2] = ["../frontend/public/worker", "../frontend/public/sw.js"];

/// Service worker entry point. Browsers only look for a new worker when this
/// script or an imported script changes, so the cache name is written into it
/// and into the import URLs.
const SHIM: &str = r#"// Generated by crates/worker/build.rs for {name}.
importScripts("./worker/gtts_worker.js?v={name}");
const ready = wasm_bindgen("./worker/gtts_worker_bg.wasm?v={name}");

self.addEventListener("install", (e) => e.waitUntil(ready.then(() => wasm_bindgen.install())));
self.addEventListener("activate", (e) => e.waitUntil(ready.then(() => wasm_bindgen.activate())));
self.addEventListener("fetch", (e) => e.respondWith(ready.then(() => wasm_bindgen.respond(e.request))));
"#;

fn collect(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if SKIPPED.iter().any(|s| path.starts_with(s)) {
            continue;
        }
        if path.is_dir() {
            collect(&path, out);
        } else {
            out.push(path);
        }
    }
}

/// Write only on change so the watched directory does not retrigger the build.
fn write_if_changed(path: &Path, contents: &str) -> std::io::Result<()> {
    if fs::read_to_string(path).ok().as_deref() == Some(contents) {
        return Ok(());
    }
    fs::write(path, contents)
}

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GTTS_PUBLISH_DIR");

    let mut files = Vec::new();
    for dir in WATCHED {
        println!("cargo:rerun-if-changed={dir}");
        collect(Path::new(dir), &mut files);
    }
    files.sort();

    let contents: Vec<Vec<u8>> = files.iter().filter_map(|p| fs::read(p).ok()).collect();
    let name = cache_name(contents.iter().map(Vec::as_slice));
    println!("cargo:rustc-env=GTTS_CACHE_NAME={name}");

    let shim = SHIM.replace("{name}", &name);
    if let Some(dir) = std::env::var_os("OUT_DIR") {
        write_if_changed(&PathBuf::from(dir).join("sw.js"), &shim)?;
    }
    if let Some(dir) = std::env::var_os("GTTS_PUBLISH_DIR") {
        write_if_changed(&PathBuf::from(dir).join("sw.js"), &shim)?;
    }
    Ok(())
}
