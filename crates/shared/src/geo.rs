use crate::models::{Coordinate, Located};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Sort key for records whose distance cannot be computed.
const UNKNOWN_DISTANCE_KM: f64 = 1e9;

/// Haversine distance in kilometres between two `(lat, lng)` points in degrees.
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let d_lat = (b.0 - a.0).to_radians();
    let d_lng = (b.1 - a.1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.0.to_radians().cos() * b.0.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance from the device to a record, if both points are known.
pub fn distance_to<T: Located>(position: Option<&Coordinate>, item: &T) -> Option<f64> {
    let pos = position?;
    let point = item.location()?;
    Some(haversine_km((pos.lat, pos.lng), point))
}

/// `12.3` or the em-dash placeholder.
pub fn format_km(distance: Option<f64>) -> String {
    match distance {
        Some(d) => format!("{:.1}", d),
        None => "\u{2014}".to_string(),
    }
}

/// Pair each item with its distance, sort ascending (unknown last, ties keep
/// fixture order) and keep the first `limit`.
pub fn nearest<'a, T: Located>(
    items: &'a [T],
    position: Option<&Coordinate>,
    limit: usize,
) -> Vec<(&'a T, Option<f64>)> {
    let mut ranked: Vec<(&T, Option<f64>)> = items
        .iter()
        .map(|item| (item, distance_to(position, item)))
        .collect();
    // `sort_by` is stable.
    ranked.sort_by(|a, b| {
        let da = a.1.unwrap_or(UNKNOWN_DISTANCE_KM);
        let db = b.1.unwrap_or(UNKNOWN_DISTANCE_KM);
        da.total_cmp(&db)
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pin {
        id: usize,
        at: Option<(f64, f64)>,
    }

    impl Located for Pin {
        fn location(&self) -> Option<(f64, f64)> {
            self.at
        }
    }

    const PARIS: (f64, f64) = (48.8566, 2.3522);
    const KYIV: (f64, f64) = (50.4501, 30.5234);

    #[test]
    fn test_distance_identity() {
        assert!(haversine_km(PARIS, PARIS).abs() < 1e-9);
    }

    #[test]
    fn test_distance_symmetric() {
        let pairs = [
            (PARIS, KYIV),
            ((0.0, 0.0), (0.0, 180.0)),
            ((-33.86, 151.2), (51.5, -0.12)),
            ((89.9, 10.0), (-89.9, -170.0)),
        ];
        for (a, b) in pairs {
            assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_distance_paris_kyiv() {
        let d = haversine_km(PARIS, KYIV);
        assert!((d - 2024.0).abs() < 15.0, "got {d}");
    }

    #[test]
    fn test_distance_half_circumference() {
        let d = haversine_km((0.0, 0.0), (0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_distance_to_requires_both_points() {
        let pos = Coordinate::new(PARIS.0, PARIS.1);
        let known = Pin { id: 0, at: Some(KYIV) };
        let unknown = Pin { id: 1, at: None };
        assert!(distance_to(None, &known).is_none());
        assert!(distance_to(Some(&pos), &unknown).is_none());
        assert!(distance_to(Some(&pos), &known).is_some());
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(Some(12.345)), "12.3");
        assert_eq!(format_km(None), "\u{2014}");
    }

    #[test]
    fn test_nearest_sorts_ascending_with_unknown_last() {
        let pos = Coordinate::new(PARIS.0, PARIS.1);
        let pins = vec![
            Pin { id: 0, at: None },
            Pin { id: 1, at: Some(KYIV) },
            Pin { id: 2, at: Some((48.86, 2.35)) },
            Pin { id: 3, at: None },
            Pin { id: 4, at: Some((49.0, 2.5)) },
        ];
        let ids: Vec<usize> = nearest(&pins, Some(&pos), 10)
            .iter()
            .map(|(p, _)| p.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 0, 3]);
    }

    #[test]
    fn test_nearest_is_stable_for_ties() {
        let pos = Coordinate::new(PARIS.0, PARIS.1);
        let pins: Vec<Pin> = (0..5).map(|id| Pin { id, at: Some(KYIV) }).collect();
        let ids: Vec<usize> = nearest(&pins, Some(&pos), 10)
            .iter()
            .map(|(p, _)| p.id)
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_nearest_without_position_keeps_fixture_order() {
        let pins: Vec<Pin> = (0..12).map(|id| Pin { id, at: Some(KYIV) }).collect();
        let ranked = nearest(&pins, None, 10);
        assert_eq!(ranked.len(), 10);
        assert!(ranked.iter().all(|(_, d)| d.is_none()));
        assert_eq!(ranked[9].0.id, 9);
    }
}
