//! One renderer per route. Each is a pure function of the application state
//! and, for the data panels, the result of loading its fixture.

use crate::error::LoadError;
use crate::geo::{self, format_km};
use crate::i18n::Translator;
use crate::models::{FuelFixture, HotelFixture, PlaceFixture, TollFixture};
use crate::panel::{Block, Card, ErrorCard, Panel, StubAction};
use crate::route::Route;
use crate::settings::AppState;

/// Maximum number of places listed by the nearby panel.
pub const NEARBY_LIMIT: usize = 10;

const NAVIGATORS: [&str; 5] = ["Google Maps", "Waze", "HERE WeGo", "TomTom", "Sygic"];

fn heading(t: &Translator, route: Route) -> Panel {
    Panel::new(t.t(route.title_key()))
}

fn yes_no(t: &Translator, value: bool) -> &'static str {
    t.t(if value { "ui.yes" } else { "ui.no" })
}

fn error_block(t: &Translator, err: &LoadError) -> Block {
    Block::Error(ErrorCard {
        title: t.t("err.load").to_string(),
        detail: err.to_string(),
        hint: t.t("err.loadHint").to_string(),
    })
}

/// Replace the list with an error card when the fixture failed to load.
fn list_or_error<T>(
    t: &Translator,
    data: Result<T, LoadError>,
    cards: impl FnOnce(T) -> Vec<Card>,
) -> Block {
    match data {
        Ok(fixture) => Block::List(cards(fixture)),
        Err(err) => error_block(t, &err),
    }
}

pub fn navigator(state: &AppState) -> Panel {
    let t = &state.language;
    let position = match &state.position {
        Some(pos) => pos.display(),
        None => t.t("nav.posUnknown").to_string(),
    };

    heading(t, Route::Navigator)
        .push(Block::KeyValue {
            key: t.t("nav.position").to_string(),
            value: position,
        })
        .push(Block::Divider)
        .push(Block::Card(
            Card::new(t.t("nav.bestNav"))
                .subtitle(t.t("nav.bestNavDesc"))
                .chips(NAVIGATORS),
        ))
        .push(Block::Card(
            Card::new(t.t("nav.routeDemo"))
                .subtitle(t.t("nav.routeDemoDesc"))
                .action(StubAction::new("▶", t.t("ui.open"), t.t("nav.routeToast"))),
        ))
        .push(Block::Note(t.t("nav.mvpNote").to_string()))
}

pub fn tolls(state: &AppState, data: Result<TollFixture, LoadError>) -> Panel {
    let t = &state.language;
    let country = state
        .position
        .as_ref()
        .and_then(|p| p.country.as_deref())
        .unwrap_or("EU");

    let list = list_or_error(t, data, |fixture| {
        fixture
            .routes
            .into_iter()
            .map(|r| {
                Card::new(r.name)
                    .subtitle(format!("{} → {}", r.from, r.to))
                    .badge(format!("{} {}", r.currency, r.estimate))
                    .chip(format!("{}: {}", t.t("tolls.class"), r.class))
                    .chip(format!("{}: {}", t.t("tolls.axles"), r.axles))
                    .chip(format!("{}: {}", t.t("tolls.country"), r.country))
                    .action(StubAction::new("🛣️", t.t("tolls.pay"), t.t("tolls.demoPay")))
            })
            .collect()
    });

    heading(t, Route::Tolls)
        .push(Block::Card(
            Card::new(t.t("tolls.miniCalc"))
                .subtitle(format!("{} ({})", t.t("tolls.miniCalcDesc"), country))
                .chips(["EETS-ready (phase)", "OBU replacement path"]),
        ))
        .push(Block::Divider)
        .push(list)
        .push(Block::Note(t.t("tolls.note").to_string()))
}

pub fn fuel(state: &AppState, data: Result<FuelFixture, LoadError>) -> Panel {
    let t = &state.language;
    let position = state.position.as_ref();

    let list = list_or_error(t, data, |fixture| {
        fixture
            .stations
            .iter()
            .map(|s| {
                let distance = geo::distance_to(position, s);
                Card::new(s.name.as_str())
                    .subtitle(format!("{} • {}", s.city, s.brand))
                    .badge(format!("-{}%", s.discount_pct))
                    .chip(format!("{}: {} {}/L", t.t("fuel.price"), s.price, s.currency))
                    .chip(format!("{}: {} km", t.t("fuel.distance"), format_km(distance)))
                    .action(StubAction::new("⛽", t.t("fuel.start"), t.t("fuel.demoStart")))
                    .action(StubAction::new("💳", t.t("fuel.credit"), t.t("ui.soon")).ghost())
            })
            .collect()
    });

    heading(t, Route::Fuel)
        .push(Block::Card(
            Card::new(t.t("fuel.discount"))
                .subtitle(t.t("fuel.discountDesc"))
                .chips(["UTA-like", "DKV-like", "E100-like"]),
        ))
        .push(Block::Divider)
        .push(list)
}

pub fn hotels(state: &AppState, data: Result<HotelFixture, LoadError>) -> Panel {
    let t = &state.language;
    let position = state.position.as_ref();

    let list = list_or_error(t, data, |fixture| {
        fixture
            .hotels
            .iter()
            .map(|h| {
                let distance = geo::distance_to(position, h);
                Card::new(h.name.as_str())
                    .subtitle(format!("{} • {}", h.city, h.kind))
                    .badge("★".repeat(h.star_count()))
                    .chip(format!("{}: {}", t.t("hotels.parking"), yes_no(t, h.parking_truck)))
                    .chip(format!("{}: {} km", t.t("hotels.distance"), format_km(distance)))
                    .action(StubAction::new("🏨", t.t("hotels.book"), t.t("hotels.demoBook")))
            })
            .collect()
    });

    heading(t, Route::Hotels)
        .push(Block::Card(
            Card::new(t.t("hotels.driverRest"))
                .subtitle(t.t("hotels.driverRestDesc"))
                .chips(["Truck parking", "Safe rest", "Partner integrations"]),
        ))
        .push(Block::Divider)
        .push(list)
}

pub fn nearby(state: &AppState, data: Result<PlaceFixture, LoadError>) -> Panel {
    let t = &state.language;
    let position = state.position.as_ref();

    let list = list_or_error(t, data, |fixture| {
        geo::nearest(&fixture.places, position, NEARBY_LIMIT)
            .into_iter()
            .map(|(p, distance)| {
                let badge = match distance {
                    Some(_) => format!("{} km", format_km(distance)),
                    None => format_km(None),
                };
                Card::new(p.name.as_str())
                    .subtitle(format!("{} • {}", p.category, p.city))
                    .badge(badge)
                    .chip(format!("{}: {}", t.t("nearby.openNow"), yes_no(t, p.open_now)))
                    .chip(format!("{}: {}", t.t("nearby.type"), p.category))
                    .action(StubAction::new("🧭", t.t("nearby.route"), t.t("nearby.demoRoute")))
            })
            .collect()
    });

    heading(t, Route::Nearby)
        .push(Block::Card(
            Card::new(t.t("nearby.find")).subtitle(t.t("nearby.findDesc")),
        ))
        .push(Block::Divider)
        .push(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::models::{Coordinate, Fixture, FuelStation, Hotel, Place, TollRoute};
    use std::collections::HashSet;
    use crate::settings::{KeyValueStore, MemoryStore, KEY_LANG};

    fn state(lang: &str, position: Option<Coordinate>) -> AppState {
        AppState {
            language: Translator::new(lang),
            position,
        }
    }

    fn toll_fixture() -> TollFixture {
        TollFixture {
            routes: vec![TollRoute {
                name: "A6 Autoroute du Soleil".into(),
                from: "Paris".into(),
                to: "Lyon".into(),
                currency: "EUR".into(),
                estimate: 82.5,
                class: "4".into(),
                axles: 5,
                country: "FR".into(),
            }],
        }
    }

    fn fuel_fixture() -> FuelFixture {
        let station = |name: &str, lat: f64, lng: f64| FuelStation {
            name: name.into(),
            city: "Lyon".into(),
            brand: "TruckStop".into(),
            discount_pct: 4.0,
            price: 1.689,
            currency: "EUR".into(),
            lat: Some(lat),
            lng: Some(lng),
        };
        FuelFixture {
            stations: vec![station("A", 45.76, 4.83), station("B", 50.11, 8.68)],
        }
    }

    fn place(name: &str, at: Option<(f64, f64)>) -> Place {
        Place {
            name: name.into(),
            category: "Sight".into(),
            city: "Somewhere".into(),
            open_now: true,
            lat: at.map(|a| a.0),
            lng: at.map(|a| a.1),
        }
    }

    #[test]
    fn test_navigator_unknown_position() {
        let panel = navigator(&state("en", None));
        assert_eq!(panel.heading, "Navigator");
        assert!(panel.blocks.contains(&Block::KeyValue {
            key: "Position".into(),
            value: "Unknown (click Locate)".into(),
        }));
        assert_eq!(panel.actions().count(), 1);
    }

    #[test]
    fn test_navigator_known_position() {
        let panel = navigator(&state("en", Some(Coordinate::new(48.8566, 2.3522))));
        assert!(panel.blocks.contains(&Block::KeyValue {
            key: "Position".into(),
            value: "48.85660, 2.35220".into(),
        }));
    }

    #[test]
    fn test_render_is_idempotent() {
        let s = state("en", Some(Coordinate::new(48.8566, 2.3522)));
        assert_eq!(fuel(&s, Ok(fuel_fixture())), fuel(&s, Ok(fuel_fixture())));
        assert_eq!(navigator(&s), navigator(&s));
    }

    #[test]
    fn test_tolls_404_renders_error_card() {
        let err = LoadError::Status {
            path: TollFixture::PATH.into(),
            status: 404,
        };
        let panel = tolls(&state("en", None), Err(err));
        let card = panel.error().expect("error card");
        assert!(!card.title.is_empty());
        assert!(card.detail.contains("404"));
        assert!(card.detail.contains("data/toll_demo.json"));
        assert!(!card.hint.is_empty());
        assert_eq!(panel.heading, "Tolls");
        assert!(panel.list().is_empty());
    }

    #[test]
    fn test_parse_error_renders_error_card_for_every_data_panel() {
        let err = || LoadError::Parse {
            path: "x.json".into(),
            message: "expected value".into(),
        };
        let s = state("en", None);
        assert!(fuel(&s, Err(err())).error().is_some());
        assert!(hotels(&s, Err(err())).error().is_some());
        assert!(nearby(&s, Err(err())).error().is_some());
    }

    #[test]
    fn test_tolls_card_contents() {
        let panel = tolls(&state("en", None), Ok(toll_fixture()));
        let card = &panel.list()[0];
        assert_eq!(card.subtitle.as_deref(), Some("Paris → Lyon"));
        assert_eq!(card.badge.as_deref(), Some("EUR 82.5"));
        assert_eq!(card.chips, vec!["Class: 4", "Axles: 5", "Country: FR"]);
        assert_eq!(card.actions[0].message, "Demo: toll payment flow (stub).");
    }

    #[test]
    fn test_ukrainian_tolls_heading_with_english_body() {
        let store = MemoryStore::default();
        let mut app = AppState::load(&store, Some("en-GB"));
        app.set_language(&store, "uk");
        assert_eq!(store.get(KEY_LANG).as_deref(), Some("uk"));

        let panel = tolls(&app, Ok(toll_fixture()));
        assert_eq!(panel.heading, "Оплата доріг");
        let card = &panel.list()[0];
        assert_eq!(card.actions[0].label, "Pay tolls");
        assert_eq!(card.chips[0], "Class: 4");
    }

    #[test]
    fn test_fuel_distance_placeholder_then_numeric() {
        let panel = fuel(&state("en", None), Ok(fuel_fixture()));
        for card in panel.list() {
            assert_eq!(card.chips[1], "Distance: \u{2014} km");
        }

        let located = state("en", Some(Coordinate::new(48.8566, 2.3522)));
        let panel = fuel(&located, Ok(fuel_fixture()));
        for card in panel.list() {
            let value = card.chips[1]
                .strip_prefix("Distance: ")
                .and_then(|s| s.strip_suffix(" km"))
                .unwrap();
            let km: f64 = value.parse().unwrap();
            assert!(km.is_finite() && km > 0.0);
        }
    }

    #[test]
    fn test_fuel_credit_is_ghost_stub() {
        let panel = fuel(&state("en", None), Ok(fuel_fixture()));
        let credit = &panel.list()[0].actions[1];
        assert_eq!(credit.style, crate::panel::ActionStyle::Ghost);
        assert_eq!(credit.message, "Soon");
    }

    #[test]
    fn test_nearby_sorted_and_limited() {
        let mut places: Vec<Place> = (0..12)
            .map(|i| place(&format!("far-{i}"), Some((50.45, 30.52))))
            .collect();
        places.insert(0, place("unknown", None));
        places.push(place("close", Some((48.86, 2.35))));

        let s = state("en", Some(Coordinate::new(48.8566, 2.3522)));
        let panel = nearby(&s, Ok(PlaceFixture { places }));
        let names: Vec<&str> = panel.list().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(names.len(), NEARBY_LIMIT);
        assert_eq!(names[0], "close");
        assert_eq!(names[1], "far-0");
        assert_eq!(names[9], "far-8");
        assert!(!names.contains(&"unknown"));
        assert!(panel.list()[0].badge.as_deref().unwrap().ends_with(" km"));
    }

    #[test]
    fn test_nearby_without_position_shows_placeholder_badges() {
        let places = vec![place("a", Some((1.0, 1.0))), place("b", None)];
        let panel = nearby(&state("en", None), Ok(PlaceFixture { places }));
        let names: Vec<&str> = panel.list().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(panel.list().iter().all(|c| c.badge.as_deref() == Some("\u{2014}")));
    }

    #[test]
    fn test_every_stub_action_has_a_message() {
        let s = state("de", None);
        let panels = [
            navigator(&s),
            tolls(&s, Ok(toll_fixture())),
            fuel(&s, Ok(fuel_fixture())),
        ];
        for panel in &panels {
            for action in panel.actions() {
                assert!(!action.label.is_empty());
                assert!(!action.message.is_empty());
            }
        }
    }

    fn card_texts(card: &Card, out: &mut Vec<String>) {
        out.push(card.title.clone());
        out.extend(card.subtitle.clone());
        out.extend(card.badge.clone());
        out.extend(card.chips.iter().cloned());
        for action in &card.actions {
            out.push(action.label.clone());
            out.push(action.message.clone());
        }
    }

    /// Every user-visible string in a panel. Chip labels are split off their value.
    fn panel_texts(panel: &Panel) -> Vec<String> {
        let mut out = vec![panel.heading.clone()];
        for block in &panel.blocks {
            match block {
                Block::KeyValue { key, value } => out.extend([key.clone(), value.clone()]),
                Block::Card(card) => card_texts(card, &mut out),
                Block::List(cards) => cards.iter().for_each(|c| card_texts(c, &mut out)),
                Block::Note(text) => out.push(text.clone()),
                Block::Error(err) => out.extend([err.title.clone(), err.hint.clone()]),
                Block::Divider => {}
            }
        }
        let labels: Vec<String> = out
            .iter()
            .filter_map(|t| t.split_once(": ").map(|(label, _)| label.to_string()))
            .collect();
        out.extend(labels);
        out
    }

    #[test]
    fn test_no_panel_shows_a_raw_catalog_key() {
        let keys: HashSet<&str> = Catalog::global().keys().collect();
        let prefixes: HashSet<&str> = keys
            .iter()
            .filter_map(|k| k.split_once('.').map(|(p, _)| p))
            .collect();
        let looks_raw = |text: &str| {
            keys.contains(text)
                || (!text.contains(char::is_whitespace)
                    && text
                        .split_once('.')
                        .is_some_and(|(p, rest)| prefixes.contains(p) && !rest.is_empty()))
        };

        let hotel_data = HotelFixture {
            hotels: vec![Hotel {
                name: "Relais".into(),
                city: "Chaponnay".into(),
                kind: "Motel".into(),
                stars: None,
                parking_truck: true,
                lat: Some(45.6),
                lng: Some(4.9),
            }],
        };
        let place_data = PlaceFixture {
            places: vec![place("a", Some((48.0, 2.0))), place("b", None)],
        };
        let missing = || LoadError::Status {
            path: "data/x.json".into(),
            status: 404,
        };

        for lang in ["en", "uk", "ru", "de"] {
            for position in [None, Some(Coordinate::new(48.8566, 2.3522))] {
                let s = state(lang, position);
                let panels = [
                    navigator(&s),
                    tolls(&s, Ok(toll_fixture())),
                    fuel(&s, Ok(fuel_fixture())),
                    hotels(&s, Ok(hotel_data.clone())),
                    nearby(&s, Ok(place_data.clone())),
                    tolls(&s, Err(missing())),
                    fuel(&s, Err(missing())),
                    hotels(&s, Err(missing())),
                    nearby(&s, Err(missing())),
                ];
                for panel in &panels {
                    for text in panel_texts(panel) {
                        assert!(!looks_raw(&text), "{lang}: raw key {text:?} in {}", panel.heading);
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_route_title_resolves_in_english() {
        for route in Route::ALL {
            let key = route.title_key();
            assert!(Catalog::global().lookup("en", key).is_some(), "{key}");
            assert_ne!(Translator::new("sv").t(key), key);
        }
    }
}
