//! DTOs for decoding Nominatim search responses.
//!
//! Nominatim encodes coordinates as decimal strings. Parsing uses
//! `f64::from_str`, which is locale independent.

use serde::Deserialize;

use crate::domain::Coordinates;

#[derive(Debug, Deserialize)]
pub(super) struct PlaceDto {
    pub(super) lat: String,
    pub(super) lon: String,
}

impl PlaceDto {
    pub(super) fn into_coordinates(self) -> Result<Coordinates, String> {
        let latitude = parse_degrees("lat", &self.lat)?;
        let longitude = parse_degrees("lon", &self.lon)?;
        Coordinates::try_new(latitude, longitude).map_err(|err| err.to_string())
    }
}

fn parse_degrees(field: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|err| format!("{field} '{raw}' is not a number: {err}"))
}
