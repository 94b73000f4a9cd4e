use crate::{Coordinate, EARTH_RADIUS_KM};

/// Great-circle distance between two coordinates in kilometres (haversine).
///
/// Defined for every finite pair; non-finite input yields NaN, which the
/// duration projector turns into a placeholder.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lng() - a.lng()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
