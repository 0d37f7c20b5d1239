use std::path::Path;

use gtts_shared::models::{Fixture, FuelFixture, HotelFixture, PlaceFixture, TollFixture};

/// Record counts of the four published fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSummary {
    pub routes: usize,
    pub stations: usize,
    pub hotels: usize,
    pub places: usize,
}

fn read<T: Fixture>(site_dir: &Path) -> Result<T, String> {
    let path = site_dir.join(T::PATH);
    let data = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {}", T::PATH, e))
}

impl FixtureSummary {
    /// Parses every fixture under `site_dir` with the same types the app uses.
    pub fn load(site_dir: &Path) -> Result<Self, String> {
        let tolls: TollFixture = read(site_dir)?;
        let fuel: FuelFixture = read(site_dir)?;
        let hotels: HotelFixture = read(site_dir)?;
        let places: PlaceFixture = read(site_dir)?;

        let summary = FixtureSummary {
            routes: tolls.routes.len(),
            stations: fuel.stations.len(),
            hotels: hotels.hotels.len(),
            places: places.places.len(),
        };
        tracing::info!(
            routes = summary.routes,
            stations = summary.stations,
            hotels = summary.hotels,
            places = summary.places,
            "Loaded fixtures"
        );
        Ok(summary)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use gtts_shared::models::FIXTURE_PATHS;

    pub(crate) fn write_fixtures(dir: &Path) {
        std::fs::create_dir_all(dir.join("data")).unwrap();
        let bodies = [
            (
                "data/toll_demo.json",
                r#"{"routes":[{"name":"A6","from":"Paris","to":"Lyon","currency":"EUR","estimate":82.5,"class":"4","axles":5,"country":"FR"}]}"#,
            ),
            (
                "data/fuel_stations.json",
                r#"{"stations":[{"name":"S","city":"C","brand":"B","discountPct":3,"price":1.7,"currency":"EUR"}]}"#,
            ),
            ("data/hotels.json", r#"{"hotels":[]}"#),
            (
                "data/pois.json",
                r#"{"places":[{"name":"P","category":"Landmark","city":"X","openNow":true,"lat":1.0,"lng":2.0},{"name":"Q","category":"Square","city":"Y"}]}"#,
            ),
        ];
        for (path, body) in bodies {
            std::fs::write(dir.join(path), body).unwrap();
        }
    }

    #[test]
    fn test_counts_records() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let summary = FixtureSummary::load(dir.path()).unwrap();
        assert_eq!(
            summary,
            FixtureSummary {
                routes: 1,
                stations: 1,
                hotels: 0,
                places: 2,
            }
        );
    }

    #[test]
    fn test_missing_fixture_names_path() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        std::fs::remove_file(dir.path().join("data/hotels.json")).unwrap();

        let err = FixtureSummary::load(dir.path()).unwrap_err();
        assert!(err.contains("hotels.json"), "{err}");
    }

    #[test]
    fn test_malformed_fixture_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        std::fs::write(dir.path().join("data/pois.json"), "{ not json").unwrap();

        let err = FixtureSummary::load(dir.path()).unwrap_err();
        assert!(err.starts_with("Failed to parse data/pois.json"), "{err}");
    }

    #[test]
    fn test_published_fixtures_parse() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend/public");
        for path in FIXTURE_PATHS {
            assert!(public.join(path).is_file(), "missing {path}");
        }
        let summary = FixtureSummary::load(&public).unwrap();
        assert!(summary.places > 10);
    }
}
