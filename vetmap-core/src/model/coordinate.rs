//! Geographic coordinates

use std::fmt;

use geo::Point;

/// Latitude/longitude pair in degrees.
///
/// Values are not range checked: anything finite or not is carried through to
/// the distance calculator as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// x = longitude, y = latitude
    pub geometry: Point<f64>,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            geometry: Point::new(lng, lat),
        }
    }

    pub fn lat(&self) -> f64 {
        self.geometry.y()
    }

    pub fn lng(&self) -> f64 {
        self.geometry.x()
    }

    pub fn is_finite(&self) -> bool {
        self.lat().is_finite() && self.lng().is_finite()
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(geometry: Point<f64>) -> Self {
        Self { geometry }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.geometry
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat(), self.lng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_axes_follow_lng_lat_order() {
        let coordinate = Coordinate::new(40.4, -3.7);
        let point: Point<f64> = coordinate.into();

        assert_eq!(point.x(), -3.7);
        assert_eq!(point.y(), 40.4);
        assert_eq!(Coordinate::from(point), coordinate);
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let coordinate = Coordinate::new(123.0, -400.0);
        assert_eq!(coordinate.lat(), 123.0);
        assert_eq!(coordinate.lng(), -400.0);
        assert!(coordinate.is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
    }
}
