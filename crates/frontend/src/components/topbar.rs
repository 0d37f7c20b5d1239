use dioxus::prelude::*;
use gtts_shared::i18n::LANGUAGES;

use crate::state::App;

#[component]
pub fn Topbar() -> Element {
    let mut app = use_context::<App>();
    let t = app.translator();
    let code = t.code();
    let status = t.t(app.status.read().label_key());
    let locate = t.t("ui.locate");
    let share = t.t("ui.share");

    rsx! {
        header { class: "topbar",
            button {
                class: "iconBtn",
                r#type: "button",
                "aria-label": t.t("ui.menu"),
                onclick: move |_| app.drawer_open.set(true),
                "☰"
            }
            div { class: "brand", "GTTS" }
            span { class: "pill", "{status}" }
            div { class: "spacer" }
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| app.locate(),
                "📍 {locate}"
            }
            button {
                class: "btnGhost",
                r#type: "button",
                onclick: move |_| app.share(),
                "🔗 {share}"
            }
            select {
                class: "lang",
                "aria-label": t.t("ui.language"),
                value: "{code}",
                onchange: move |evt: Event<FormData>| app.set_language(&evt.value()),
                for lang in LANGUAGES {
                    option {
                        value: lang.code,
                        selected: lang.code == code,
                        "{lang.name}"
                    }
                }
            }
        }
    }
}
