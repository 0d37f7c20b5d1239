//! The single owner of mutable app state. Components reach it through context
//! and never touch storage or the router directly.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use gtts_shared::i18n::Translator;
use gtts_shared::models::Coordinate;
use gtts_shared::route::{NavigateOptions, Navigation, Router};
use gtts_shared::settings::AppState;

use crate::browser;
use crate::geolocation;
use crate::storage::LocalStorage;

const TOAST_MS: u32 = 2_800;

/// Status pill next to the locate button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Demo,
    Working,
    Ready,
}

impl Status {
    pub fn label_key(self) -> &'static str {
        match self {
            Status::Demo => "ui.demo",
            Status::Working => "ui.working",
            Status::Ready => "ui.ready",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct App {
    pub state: Signal<AppState>,
    pub router: Signal<Router>,
    /// Route and ticket of the render in progress.
    pub view: Signal<Navigation>,
    pub status: Signal<Status>,
    pub toast: Signal<Option<Toast>>,
    pub drawer_open: Signal<bool>,
    toast_seq: Signal<u64>,
}

impl App {
    /// Restore persisted settings and render the route named by the current fragment.
    pub fn init() -> Self {
        let state = AppState::load(&LocalStorage, browser::platform_locale().as_deref());
        browser::set_document_lang(state.language.code());

        let fragment = browser::location_fragment();
        let mut router = Router::default();
        let first = router.navigate(
            fragment.trim_start_matches('#'),
            NavigateOptions { replace: true },
            &fragment,
        );
        tracing::info!(route = %first.route, lang = state.language.code(), "starting");

        App {
            state: Signal::new(state),
            router: Signal::new(router),
            view: Signal::new(first),
            status: Signal::new(Status::Demo),
            toast: Signal::new(None),
            drawer_open: Signal::new(false),
            toast_seq: Signal::new(0),
        }
    }

    pub fn translator(&self) -> Translator {
        self.state.read().language
    }

    pub fn t(&self, key: &'static str) -> &'static str {
        self.translator().t(key)
    }

    pub fn navigate(&mut self, name: &str) {
        let fragment = browser::location_fragment();
        let nav = self
            .router
            .write()
            .navigate(name, NavigateOptions::default(), &fragment);
        if let Some(fragment) = &nav.write_fragment {
            browser::set_location_fragment(fragment);
        }
        self.view.set(nav);
    }

    /// Called for every `hashchange`, including the ones we caused.
    pub fn on_fragment_change(&mut self) {
        let fragment = browser::location_fragment();
        let nav = self.router.write().on_fragment_change(&fragment);
        if let Some(nav) = nav {
            if let Some(fragment) = &nav.write_fragment {
                browser::set_location_fragment(fragment);
            }
            self.view.set(nav);
        }
    }

    /// Re-render the current route in place.
    pub fn refresh(&mut self) {
        let nav = self.router.write().refresh();
        self.view.set(nav);
    }

    pub fn set_language(&mut self, code: &str) {
        self.state.write().set_language(&LocalStorage, code);
        browser::set_document_lang(self.translator().code());
        self.status.set(Status::Demo);
        self.refresh();
    }

    pub fn set_position(&mut self, position: Coordinate) {
        self.state.write().set_position(&LocalStorage, position);
        self.refresh();
    }

    /// Show a transient notification. A newer one replaces it.
    pub fn notify(&mut self, message: impl Into<String>) {
        let id = *self.toast_seq.peek() + 1;
        self.toast_seq.set(id);
        self.toast.set(Some(Toast {
            id,
            message: message.into(),
        }));

        let mut toast = self.toast;
        spawn(async move {
            TimeoutFuture::new(TOAST_MS).await;
            let current = toast.peek().as_ref().map(|t| t.id);
            if current == Some(id) {
                toast.set(None);
            }
        });
    }

    pub fn locate(&mut self) {
        self.status.set(Status::Working);
        let mut app = *self;
        spawn(async move {
            match geolocation::current_position().await {
                Ok(position) => {
                    tracing::info!(lat = position.lat, lng = position.lng, "position updated");
                    app.set_position(position);
                    app.status.set(Status::Ready);
                }
                Err(err) => {
                    tracing::warn!(%err, "locate failed");
                    app.status.set(Status::Demo);
                    let message = app.t("err.location");
                    app.notify(message);
                }
            }
        });
    }

    /// Copy the page URL, falling back to a prompt the user can copy from.
    pub fn share(&mut self) {
        let mut app = *self;
        spawn(async move {
            let url = match browser::page_url() {
                Ok(url) => url,
                Err(err) => return app.report_unexpected(&err),
            };
            match browser::copy_to_clipboard(&url).await {
                Ok(()) => {
                    let message = app.t("ui.copied");
                    app.notify(message);
                }
                Err(err) => {
                    tracing::debug!(?err, "clipboard unavailable");
                    browser::prompt(app.t("ui.copyPrompt"), &url);
                }
            }
        });
    }

    /// Log an error that escaped every local recovery and tell the user once.
    pub fn report_unexpected(&mut self, err: &dyn std::fmt::Display) {
        tracing::error!(%err, "unexpected error");
        let message = self.t("err.unexpected");
        self.notify(message);
    }
}
