use dioxus::prelude::*;
use futures::StreamExt;

use crate::browser;
use crate::components::drawer::Drawer;
use crate::components::map_card::MapCard;
use crate::components::panel_view::{PanelFailed, PanelView};
use crate::components::toast::ToastHost;
use crate::components::topbar::Topbar;
use crate::state::App;

#[component]
pub fn Shell() -> Element {
    let app = use_context_provider(App::init);

    // hashchange fires outside the Dioxus runtime; hop through a coroutine.
    let fragments = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        let mut app = app;
        while rx.next().await.is_some() {
            app.on_fragment_change();
        }
    });

    use_hook(move || {
        let tx = fragments.tx();
        browser::listen_fragment_changes(move || {
            let _ = tx.unbounded_send(());
        });
        browser::register_service_worker();
    });

    let t = app.translator();
    let (route, ticket) = {
        let view = app.view.read();
        (view.route, view.ticket)
    };
    let title = t.t(route.title_key());

    rsx! {
        Topbar {}
        Drawer {}
        main { class: "layout",
            MapCard {}
            section { class: "card view",
                h2 { id: "viewTitle", "{title}" }
                // Keyed by ticket: the next render mounts a fresh boundary.
                for ticket in [ticket] {
                    ErrorBoundary {
                        key: "{ticket}",
                        handle_error: |_errors: ErrorContext| rsx! { PanelFailed {} },
                        PanelView {}
                    }
                }
            }
        }
        footer { class: "footer", {t.t("footer.disclaimer")} }
        ToastHost {}
    }
}
