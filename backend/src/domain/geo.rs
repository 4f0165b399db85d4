//! Geographic coordinates and great-circle distance.

use std::fmt;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Validation errors returned by [`Coordinates::try_new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinatesValidationError {
    /// Latitude outside `[-90, 90]` or not finite.
    Latitude(f64),
    /// Longitude outside `[-180, 180]` or not finite.
    Longitude(f64),
}

impl fmt::Display for CoordinatesValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude(value) => write!(f, "latitude {value} is outside [-90, 90]"),
            Self::Longitude(value) => write!(f, "longitude {value} is outside [-180, 180]"),
        }
    }
}

impl std::error::Error for CoordinatesValidationError {}

/// WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Validate and construct a coordinate pair.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesValidationError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinatesValidationError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinatesValidationError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Great-circle distance between two points in kilometres.
///
/// # Examples
/// ```
/// use address_service::domain::{haversine_km, Coordinates};
///
/// let here = Coordinates::try_new(52.09, 5.12).expect("valid coordinates");
/// assert_eq!(haversine_km(here, here), 0.0);
/// ```
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::PI;

    fn point(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates::try_new(latitude, longitude).expect("valid coordinates")
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    fn identical_points_are_zero_apart() {
        let utrecht = point(52.0907, 5.1214);
        assert_eq!(haversine_km(utrecht, utrecht), 0.0);
    }

    #[rstest]
    fn antipodal_points_span_half_the_circumference() {
        assert_close(haversine_km(point(0.0, 0.0), point(0.0, 180.0)), PI * EARTH_RADIUS_KM);
    }

    #[rstest]
    fn equator_to_pole_is_a_quarter_circle() {
        assert_close(
            haversine_km(point(0.0, 0.0), point(90.0, 0.0)),
            EARTH_RADIUS_KM * PI / 2.0,
        );
    }

    #[rstest]
    fn longitude_difference_contributes_to_distance() {
        let distance = haversine_km(point(0.0, 0.0), point(0.0, 90.0));
        assert_close(distance, EARTH_RADIUS_KM * PI / 2.0);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let amsterdam = point(52.3676, 4.9041);
        let paris = point(48.8566, 2.3522);
        assert_close(haversine_km(amsterdam, paris), haversine_km(paris, amsterdam));
        assert!((425.0..435.0).contains(&haversine_km(amsterdam, paris)));
    }

    #[rstest]
    #[case(90.5, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(f64::NAN, 0.0)]
    fn rejects_invalid_latitude(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(matches!(
            Coordinates::try_new(latitude, longitude),
            Err(CoordinatesValidationError::Latitude(_))
        ));
    }

    #[rstest]
    #[case(0.0, 180.5)]
    #[case(0.0, f64::INFINITY)]
    fn rejects_invalid_longitude(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(matches!(
            Coordinates::try_new(latitude, longitude),
            Err(CoordinatesValidationError::Longitude(_))
        ));
    }
}
