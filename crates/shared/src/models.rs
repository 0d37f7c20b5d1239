use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Country recorded for every captured fix. No reverse geocoding is done.
pub const PLACEHOLDER_COUNTRY: &str = "EU";

/// A captured device position. Replaced wholesale on each successful locate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinate {
            lat,
            lng,
            country: Some(PLACEHOLDER_COUNTRY.to_string()),
        }
    }

    /// `lat, lng` with five decimals, as shown in the shell and navigator view.
    pub fn display(&self) -> String {
        format!("{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Anything with an optional point on the map.
pub trait Located {
    fn location(&self) -> Option<(f64, f64)>;
}

/// A bundled JSON dataset fetched by relative path.
pub trait Fixture: DeserializeOwned {
    const PATH: &'static str;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollRoute {
    pub name: String,
    pub from: String,
    pub to: String,
    pub currency: String,
    pub estimate: f64,
    pub class: String,
    pub axles: u32,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TollFixture {
    pub routes: Vec<TollRoute>,
}

impl Fixture for TollFixture {
    const PATH: &'static str = "data/toll_demo.json";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStation {
    pub name: String,
    pub city: String,
    pub brand: String,
    pub discount_pct: f64,
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FuelFixture {
    pub stations: Vec<FuelStation>,
}

impl Fixture for FuelFixture {
    const PATH: &'static str = "data/fuel_stations.json";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub name: String,
    pub city: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub stars: Option<f64>,
    #[serde(default)]
    pub parking_truck: bool,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Hotel {
    /// Unrated hotels show three stars. Fractional ratings are truncated and
    /// the result is clamped to `0..=5`.
    pub fn star_count(&self) -> usize {
        match self.stars {
            None => 3,
            Some(n) if n == 0.0 => 3,
            Some(n) => n.trunc().clamp(0.0, 5.0) as usize,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HotelFixture {
    pub hotels: Vec<Hotel>,
}

impl Fixture for HotelFixture {
    const PATH: &'static str = "data/hotels.json";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub category: String,
    pub city: String,
    #[serde(default)]
    pub open_now: bool,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceFixture {
    pub places: Vec<Place>,
}

impl Fixture for PlaceFixture {
    const PATH: &'static str = "data/pois.json";
}

macro_rules! impl_located {
    ($($ty:ty),*) => {
        $(impl Located for $ty {
            fn location(&self) -> Option<(f64, f64)> {
                Some((self.lat?, self.lng?))
            }
        })*
    };
}

impl_located!(FuelStation, Hotel, Place);

/// Paths of every fixture, in precache order.
pub const FIXTURE_PATHS: [&str; 4] = [
    FuelFixture::PATH,
    HotelFixture::PATH,
    PlaceFixture::PATH,
    TollFixture::PATH,
];
