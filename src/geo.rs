/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees. Ranges are not checked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_meters(self.lat, self.lon, other.lat, other.lon)
    }
}

// Shared `a` term of the haversine formula, inputs in degrees.
fn haversine_term(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1).to_radians();
    (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2)
}

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in meters.
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let a = haversine_term(lat1, lon1, lat2, lon2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Same distance as [`haversine_meters`], written with `asin` instead of `atan2`.
/// Loses precision close to antipodal points.
pub fn haversine_meters_asin(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let a = haversine_term(lat1, lon1, lat2, lon2);
    // Rounding can push `a` a hair above 1.0.
    2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn same_point_is_zero() {
        assert_eq!(haversine_meters(37.7749, -122.4194, 37.7749, -122.4194), 0.0);
        assert_eq!(haversine_meters_asin(37.7749, -122.4194, 37.7749, -122.4194), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine_meters(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111_194.93).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn san_francisco_to_los_angeles() {
        let sf = Coordinate::new(37.7749, -122.4194);
        let la = Coordinate::new(34.0522, -118.2437);
        let d = sf.distance_to(&la);
        assert!((d - 559_120.0).abs() < 1_000.0, "got {}", d);
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0, 1.0)]
    #[case(37.7749, -122.4194, 34.0522, -118.2437)]
    #[case(35.0, 127.0, 35.001, 127.001)]
    #[case(-33.8688, 151.2093, 51.5074, -0.1278)]
    fn distance_is_symmetric(#[case] lat1: f64, #[case] lon1: f64, #[case] lat2: f64, #[case] lon2: f64) {
        let ab = haversine_meters(lat1, lon1, lat2, lon2);
        let ba = haversine_meters(lat2, lon2, lat1, lon1);
        assert!((ab - ba).abs() < 1e-6, "{} != {}", ab, ba);
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0, 1.0)]
    #[case(37.7749, -122.4194, 34.0522, -118.2437)]
    #[case(-33.8688, 151.2093, 51.5074, -0.1278)]
    fn formulations_agree(#[case] lat1: f64, #[case] lon1: f64, #[case] lat2: f64, #[case] lon2: f64) {
        let atan2 = haversine_meters(lat1, lon1, lat2, lon2);
        let asin = haversine_meters_asin(lat1, lon1, lat2, lon2);
        assert!((atan2 - asin).abs() < 1e-3, "{} vs {}", atan2, asin);
    }
}
