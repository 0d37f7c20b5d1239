use dioxus::prelude::*;

use crate::state::App;

#[component]
pub fn ToastHost() -> Element {
    let app = use_context::<App>();
    let toast = app.toast.read().clone();

    rsx! {
        if let Some(toast) = toast {
            div { key: "{toast.id}", class: "toast", role: "status", "{toast.message}" }
        }
    }
}
