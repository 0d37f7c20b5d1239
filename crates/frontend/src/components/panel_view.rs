use dioxus::prelude::*;
use gtts_shared::error::BrowserError;
use gtts_shared::panel::{ActionStyle, Block, Card, ErrorCard, Panel, StubAction};
use gtts_shared::route::{RenderTicket, Router};

use crate::loader;
use crate::state::App;

type Rendered = (RenderTicket, Result<Panel, BrowserError>);

/// The result to show, if any. Results from an outdated navigation are dropped.
fn visible(rendered: Option<&Rendered>, router: &Router) -> Option<Result<Panel, BrowserError>> {
    match rendered {
        Some((ticket, result)) if router.is_current(*ticket) => Some(result.clone()),
        _ => None,
    }
}

/// Loads and shows the panel for the current route. An unexpected failure is
/// returned as an error for the enclosing boundary.
#[component]
pub fn PanelView() -> Element {
    let app = use_context::<App>();

    let panel = use_resource(move || {
        let nav = app.view.read().clone();
        let state = app.state.read().clone();
        async move {
            let result = loader::load_panel(nav.route, &state).await;
            if let Err(err) = &result {
                tracing::error!(%err, route = %nav.route, "panel failed");
            }
            (nav.ticket, result)
        }
    });

    let current = visible(panel.read().as_ref(), &app.router.peek());

    match current {
        Some(result) => {
            let panel = result?;
            rsx! { PanelBody { panel } }
        }
        None => rsx! {
            div { class: "loading", "aria-busy": "true", "…" }
        },
    }
}

/// Shown by the outermost boundary in place of the panel. Raises one
/// notification per failure; the rest of the shell keeps working.
#[component]
pub fn PanelFailed() -> Element {
    let mut app = use_context::<App>();
    use_hook(move || {
        spawn(async move {
            app.report_unexpected(&"panel failed to render");
        });
    });
    rsx! {
        div { class: "loading" }
    }
}

#[component]
fn PanelBody(panel: Panel) -> Element {
    rsx! {
        h3 { class: "sectionTitle", "{panel.heading}" }
        for block in panel.blocks.iter().cloned() {
            {block_view(block)}
        }
    }
}

fn block_view(block: Block) -> Element {
    match block {
        Block::KeyValue { key, value } => rsx! {
            div { class: "kv",
                div { class: "k", "{key}" }
                div { class: "v", "{value}" }
            }
        },
        Block::Card(card) => rsx! { CardView { card } },
        Block::Divider => rsx! { div { class: "hr" } },
        Block::List(cards) => rsx! {
            div { class: "list",
                for card in cards {
                    CardView { card }
                }
            }
        },
        Block::Note(text) => rsx! { div { class: "note", "{text}" } },
        Block::Error(error) => rsx! { ErrorView { error } },
    }
}

#[component]
fn CardView(card: Card) -> Element {
    rsx! {
        div { class: "item",
            div { class: "itemTop",
                div {
                    div { class: "itemTitle", "{card.title}" }
                    if let Some(subtitle) = &card.subtitle {
                        div { class: "itemSub", "{subtitle}" }
                    }
                }
                if let Some(badge) = &card.badge {
                    div { class: "badge", "{badge}" }
                }
            }
            if !card.chips.is_empty() {
                div { class: "row",
                    for chip in &card.chips {
                        span { class: "chip", "{chip}" }
                    }
                }
            }
            if !card.actions.is_empty() {
                div { class: "row",
                    for action in card.actions.iter().cloned() {
                        StubButton { action }
                    }
                }
            }
        }
    }
}

/// Shows the action's notification and does nothing else.
#[component]
fn StubButton(action: StubAction) -> Element {
    let mut app = use_context::<App>();
    let class = match action.style {
        ActionStyle::Primary => "btn",
        ActionStyle::Ghost => "btnGhost",
    };
    let message = action.message.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| app.notify(message.clone()),
            "{action.icon} {action.label}"
        }
    }
}

#[component]
fn ErrorView(error: ErrorCard) -> Element {
    rsx! {
        div { class: "item error", role: "alert",
            div { class: "itemTitle", "⚠ {error.title}" }
            div { class: "itemSub", "{error.detail}" }
            div { class: "note", "{error.hint}" }
        }
    }
}
