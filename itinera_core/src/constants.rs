pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
