use dioxus::prelude::*;
use gtts_shared::route::Route;

use crate::state::App;

/// Side menu. The active entry follows the router, not the click.
#[component]
pub fn Drawer() -> Element {
    let mut app = use_context::<App>();
    let t = app.translator();
    let open = *app.drawer_open.read();
    let active = app.view.read().route;

    rsx! {
        if open {
            div {
                class: "backdrop",
                onclick: move |_| app.drawer_open.set(false),
            }
        }
        aside {
            class: if open { "drawer open" } else { "drawer" },
            "aria-hidden": if open { "false" } else { "true" },
            div { class: "drawerHead",
                div { class: "brand", "GTTS" }
                button {
                    class: "iconBtn",
                    r#type: "button",
                    "aria-label": t.t("ui.close"),
                    onclick: move |_| app.drawer_open.set(false),
                    "✕"
                }
            }
            nav {
                for route in Route::ALL {
                    button {
                        class: if route == active { "navItem active" } else { "navItem" },
                        r#type: "button",
                        "data-route": route.as_str(),
                        onclick: move |_| {
                            app.navigate(route.as_str());
                            app.drawer_open.set(false);
                        },
                        {format!("{} {}", route.icon(), t.t(route.title_key()))}
                    }
                }
            }
            div { class: "note", {t.t("drawer.note")} }
        }
    }
}
