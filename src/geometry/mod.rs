use num_traits::Float;


/// Mean Earth radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;


/// Geographic coordinate in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}


/// Great-circle distance between two coordinates using the haversine formula
/// https://en.wikipedia.org/wiki/Haversine_formula
/// Returns distance in meters
/// Never overestimates the road distance between the points, so it serves as
/// the admissible A* heuristic when edge weights are physical distances
pub fn haversine(a: Coord, b: Coord) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lon - a.lon).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Euclidean distance
/// Heuristic for graphs laid out on a plane rather than the globe
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
{
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


#[cfg(test)]
mod tests {
    use super::*;

    // One degree of latitude on the sphere used by haversine
    const METERS_PER_LAT_DEGREE: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

    #[test]
    fn test_haversine_zero_at_same_point() {
        let p = Coord::new(40.7128, -74.0060);
        assert_eq!(haversine(p, p), 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = Coord::new(51.5074, -0.1278);
        let b = Coord::new(48.8566, 2.3522);
        let ab = haversine(a, b);
        let ba = haversine(b, a);
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 0.0);
    }

    #[test]
    fn test_haversine_london_to_paris() {
        // City centers sit roughly 343.5 km apart on the great circle
        let london = Coord::new(51.5074, -0.1278);
        let paris = Coord::new(48.8566, 2.3522);
        let d = haversine(london, paris);
        assert!((d - 343_500.0).abs() < 2_000.0, "got {d}");
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(1.0, 0.0);
        let d = haversine(a, b);
        assert!((d - METERS_PER_LAT_DEGREE).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_haversine_one_degree_of_longitude_at_equator() {
        // Along the equator a degree of longitude spans the same arc as a
        // degree of latitude
        let a = Coord::new(0.0, 10.0);
        let b = Coord::new(0.0, 11.0);
        let d = haversine(a, b);
        assert!((d - METERS_PER_LAT_DEGREE).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_haversine_shrinks_with_latitude() {
        // A degree of longitude is shorter away from the equator
        let equator = haversine(Coord::new(0.0, 0.0), Coord::new(0.0, 1.0));
        let north = haversine(Coord::new(60.0, 0.0), Coord::new(60.0, 1.0));
        assert!(north < equator / 1.9);
    }

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(0.0, 0.0, 3.0, 4.0), 5.0);
    }
}
