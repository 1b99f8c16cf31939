use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS_METERS;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint { lat, lng }
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lng1 = self.lng.to_radians();
        let lat2 = other.lat.to_radians();
        let lng2 = other.lng.to_radians();

        let dlat = lat2 - lat1;
        let dlng = lng2 - lng1;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_to_itself() {
        let point = GeoPoint::new(-1.2655, 116.8312);
        assert_eq!(point.haversine_distance(&point), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);

        // 2 * pi * R / 360
        let expected = 111_194.93;
        assert!((a.haversine_distance(&b) - expected).abs() < 1.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(-1.2768, 116.8289);
        let b = GeoPoint::new(-1.2402, 116.8612);

        assert_eq!(a.haversine_distance(&b), b.haversine_distance(&a));
    }
}
