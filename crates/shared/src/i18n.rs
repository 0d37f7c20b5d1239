//! String catalog: one authoritative English table plus sparse per-language
//! overrides. Lookups fall back selected language -> English -> raw key.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

/// Every language offered in the selector.
pub const LANGUAGES: [Language; 26] = [
    lang("en", "English"),
    lang("uk", "Українська"),
    lang("ru", "Русский"),
    lang("bg", "Български"),
    lang("hr", "Hrvatski"),
    lang("cs", "Čeština"),
    lang("da", "Dansk"),
    lang("nl", "Nederlands"),
    lang("et", "Eesti"),
    lang("fi", "Suomi"),
    lang("fr", "Français"),
    lang("de", "Deutsch"),
    lang("el", "Ελληνικά"),
    lang("hu", "Magyar"),
    lang("ga", "Gaeilge"),
    lang("it", "Italiano"),
    lang("lv", "Latviešu"),
    lang("lt", "Lietuvių"),
    lang("mt", "Malti"),
    lang("pl", "Polski"),
    lang("pt", "Português"),
    lang("ro", "Română"),
    lang("sk", "Slovenčina"),
    lang("sl", "Slovenščina"),
    lang("es", "Español"),
    lang("sv", "Svenska"),
];

const EN: &[(&str, &str)] = &[
    ("ui.locate", "Locate"),
    ("ui.share", "Share"),
    ("ui.open", "Open"),
    ("ui.soon", "Soon"),
    ("ui.yes", "Yes"),
    ("ui.no", "No"),
    ("ui.demo", "Demo"),
    ("ui.ready", "Ready"),
    ("ui.working", "Working…"),
    ("ui.copied", "Link copied"),
    ("ui.copyPrompt", "Copy link:"),
    ("ui.menu", "Menu"),
    ("ui.close", "Close"),
    ("ui.language", "Language"),
    ("err.location", "Location not available. Allow location permission or use demo mode."),
    ("err.load", "Could not load data"),
    ("err.loadHint", "Check your connection and try again. Offline, only previously cached data is available."),
    ("err.unexpected", "Something went wrong. The rest of the app keeps working."),
    ("drawer.note", "MVP demo. Map is a placeholder. Next step: integrate real Maps/Places and partner APIs."),
    ("map.title", "Map"),
    ("map.placeholder", "Map placeholder (MVP). Click “Locate” to set your position, then browse modules."),
    ("map.coord", "Coordinates:"),
    ("nav.navigator", "Navigator"),
    ("nav.tolls", "Tolls"),
    ("nav.fuel", "Fuel"),
    ("nav.hotels", "Hotels"),
    ("nav.nearby", "Nearby"),
    ("nav.position", "Position"),
    ("nav.posUnknown", "Unknown (click Locate)"),
    ("nav.bestNav", "Best navigators (shortlist)"),
    ("nav.bestNavDesc", "We will integrate multiple navigation providers and choose best per route."),
    ("nav.routeDemo", "Route demo"),
    ("nav.routeDemoDesc", "Prototype action: open route flow (demo only)."),
    ("nav.routeToast", "Route flow (demo). Next: real navigation integration."),
    ("nav.mvpNote", "Next step: connect real map provider + POI layers (fuel/hotels/attractions)."),
    ("tolls.miniCalc", "Tolls overview (MVP)"),
    ("tolls.miniCalcDesc", "Demo routes with estimated tolls. Next: EETS partner integration."),
    ("tolls.class", "Class"),
    ("tolls.axles", "Axles"),
    ("tolls.country", "Country"),
    ("tolls.pay", "Pay tolls"),
    ("tolls.demoPay", "Demo: toll payment flow (stub)."),
    ("tolls.note", "Next: pricing engine by country + vehicle class + axles + emissions."),
    ("fuel.discount", "Discounted fuel (MVP)"),
    ("fuel.discountDesc", "Demo stations list. Next: real partner discounts and payment."),
    ("fuel.price", "Price"),
    ("fuel.distance", "Distance"),
    ("fuel.start", "Start fuel session"),
    ("fuel.demoStart", "Demo: fuel session started (stub)."),
    ("fuel.credit", "Credit"),
    ("hotels.driverRest", "Driver rest (MVP)"),
    ("hotels.driverRestDesc", "Find hotels with truck parking. Next: booking partners integration."),
    ("hotels.parking", "Truck parking"),
    ("hotels.distance", "Distance"),
    ("hotels.book", "Book"),
    ("hotels.demoBook", "Demo: booking flow (stub)."),
    ("nearby.find", "Nearby tourist places"),
    ("nearby.findDesc", "Top places near your location (demo dataset). Next: Places API."),
    ("nearby.openNow", "Open now"),
    ("nearby.type", "Type"),
    ("nearby.route", "Route"),
    ("nearby.demoRoute", "Demo: route to place (stub)."),
    ("footer.disclaimer", "This is a prototype. Do not use for real payments."),
];

const UK: &[(&str, &str)] = &[
    ("ui.locate", "Геолокація"),
    ("nav.navigator", "Навігатор"),
    ("nav.tolls", "Оплата доріг"),
    ("nav.fuel", "Заправка"),
    ("nav.hotels", "Готелі"),
    ("nav.nearby", "Місця поруч"),
    ("footer.disclaimer", "Це прототип. Не використовуйте для реальних оплат."),
];

const RU: &[(&str, &str)] = &[
    ("ui.locate", "Геолокация"),
    ("nav.navigator", "Навигатор"),
    ("nav.tolls", "Оплата дорог"),
    ("nav.fuel", "Заправка"),
    ("nav.hotels", "Отели"),
    ("nav.nearby", "Места рядом"),
    ("footer.disclaimer", "Это прототип. Не используйте для реальных оплат."),
];

type Table = HashMap<&'static str, &'static str>;

#[derive(Debug)]
pub struct Catalog {
    base: Table,
    overrides: HashMap<&'static str, Table>,
}

impl Catalog {
    fn build() -> Self {
        let base = EN.iter().copied().collect();
        let overrides = [("uk", UK), ("ru", RU)]
            .into_iter()
            .map(|(code, table)| (code, table.iter().copied().collect()))
            .collect();
        Catalog { base, overrides }
    }

    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::build)
    }

    pub fn has_language(&self, code: &str) -> bool {
        LANGUAGES.iter().any(|l| l.code == code)
    }

    /// Resolve `key` for `lang`, falling back to English. `None` if neither has it.
    pub fn lookup(&self, lang: &str, key: &str) -> Option<&'static str> {
        self.overrides
            .get(lang)
            .and_then(|table| table.get(key))
            .or_else(|| self.base.get(key))
            .copied()
    }

    /// Like [`Catalog::lookup`] but never fails: an unknown key is returned as-is.
    pub fn translate<'a>(&self, lang: &str, key: &'a str) -> &'a str {
        self.lookup(lang, key).unwrap_or(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.base.keys().copied()
    }
}

/// Language-bound lookup handle passed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    code: &'static str,
}

impl Translator {
    /// Unknown codes select English.
    pub fn new(code: &str) -> Self {
        let code = LANGUAGES
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.code)
            .unwrap_or(DEFAULT_LANG);
        Translator { code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        Catalog::global().translate(self.code, key)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Translator { code: DEFAULT_LANG }
    }
}

/// Two-letter code from a platform locale such as `uk-UA` or `en_GB`.
pub fn detect_language(locale: &str) -> String {
    let raw = locale.trim().to_lowercase();
    let primary = raw.split(['-', '_']).next().unwrap_or_default();
    match primary {
        "ua" | "ukr" => "uk".to_string(),
        "" => DEFAULT_LANG.to_string(),
        other => other.to_string(),
    }
}

/// Persisted choice wins when it names a catalog language, then the detected
/// locale, then English.
pub fn resolve_language(saved: Option<&str>, platform_locale: Option<&str>) -> &'static str {
    let catalog = Catalog::global();
    if let Some(code) = saved.filter(|c| catalog.has_language(c)) {
        return Translator::new(code).code();
    }
    let detected = detect_language(platform_locale.unwrap_or(DEFAULT_LANG));
    Translator::new(&detected).code()
}
