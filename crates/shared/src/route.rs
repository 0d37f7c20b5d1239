//! Fragment routing. The URL fragment is the only routing state visible
//! outside the app; [`Router`] decides when a fragment change needs a render.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Navigator,
    Tolls,
    Fuel,
    Hotels,
    Nearby,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Navigator,
        Route::Tolls,
        Route::Fuel,
        Route::Hotels,
        Route::Nearby,
    ];

    /// Unknown or empty names resolve to the navigator.
    pub fn parse(name: &str) -> Self {
        Route::ALL
            .into_iter()
            .find(|r| r.as_str() == name)
            .unwrap_or_default()
    }

    /// Parse `#tolls`, `tolls` or an empty fragment.
    pub fn from_fragment(fragment: &str) -> Self {
        Route::parse(fragment.strip_prefix('#').unwrap_or(fragment))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Route::Navigator => "navigator",
            Route::Tolls => "tolls",
            Route::Fuel => "fuel",
            Route::Hotels => "hotels",
            Route::Nearby => "nearby",
        }
    }

    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Catalog key of the panel title and menu entry.
    pub fn title_key(self) -> &'static str {
        match self {
            Route::Navigator => "nav.navigator",
            Route::Tolls => "nav.tolls",
            Route::Fuel => "nav.fuel",
            Route::Hotels => "nav.hotels",
            Route::Nearby => "nav.nearby",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Navigator => "🧭",
            Route::Tolls => "🛣️",
            Route::Fuel => "⛽",
            Route::Hotels => "🏨",
            Route::Nearby => "📍",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one render pass. Results carrying an older ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RenderTicket(u64);

impl fmt::Display for RenderTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NavigateOptions {
    /// Render without writing the fragment.
    pub replace: bool,
}

/// Outcome of a navigation: what to render and whether to write the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub ticket: RenderTicket,
    pub write_fragment: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    generation: u64,
}

impl Router {
    pub fn current(&self) -> Route {
        self.current
    }

    pub fn ticket(&self) -> RenderTicket {
        RenderTicket(self.generation)
    }

    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Navigate to `name`. `location_fragment` is the fragment currently in the
    /// address bar; writing an identical fragment fires no `hashchange`.
    pub fn navigate(
        &mut self,
        name: &str,
        options: NavigateOptions,
        location_fragment: &str,
    ) -> Navigation {
        let route = Route::parse(name);
        let write_fragment = if options.replace || location_fragment == route.fragment() {
            None
        } else {
            Some(route.fragment())
        };
        self.current = route;
        self.generation += 1;
        Navigation {
            route,
            ticket: self.ticket(),
            write_fragment,
        }
    }

    /// Handle a `hashchange`. Returns `None` when the fragment already names
    /// the rendered route, which covers every echo of a fragment this router
    /// wrote, however many are queued. A non-canonical fragment is rewritten.
    pub fn on_fragment_change(&mut self, fragment: &str) -> Option<Navigation> {
        let route = Route::from_fragment(fragment);
        if route == self.current && fragment == route.fragment() {
            return None;
        }
        Some(self.navigate(route.as_str(), NavigateOptions::default(), fragment))
    }

    /// Re-render the current route in place (language or position changed).
    pub fn refresh(&mut self) -> Navigation {
        let route = self.current;
        self.generation += 1;
        Navigation {
            route,
            ticket: self.ticket(),
            write_fragment: None,
        }
    }
}
