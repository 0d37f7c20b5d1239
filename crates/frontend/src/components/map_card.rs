use dioxus::prelude::*;

use crate::state::App;

#[component]
pub fn MapCard() -> Element {
    let app = use_context::<App>();
    let t = app.translator();
    let coord = match &app.state.read().position {
        Some(pos) => pos.display(),
        None => "\u{2014}".to_string(),
    };

    rsx! {
        section { class: "card map",
            h2 { {t.t("map.title")} }
            div { class: "mapPlaceholder", {t.t("map.placeholder")} }
            div { class: "kv",
                div { class: "k", {t.t("map.coord")} }
                div { class: "v", "{coord}" }
            }
        }
    }
}
