//! Driven port for resolving an address to coordinates.
//!
//! The domain owns the query text so every adapter geocodes the same string
//! for a given record.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{Address, Coordinates};

use super::define_port_error;

/// Free-text geocoding query in the form `"{street} {number}, {zipCode} {city}"`.
///
/// # Examples
/// ```
/// use address_service::domain::{Address, AddressDraft, AddressId};
/// use address_service::domain::ports::GeocodeQuery;
///
/// let draft = AddressDraft::new("Elm", 5, "1234AB", "Utrecht", "NL").expect("valid");
/// let query = GeocodeQuery::from(&Address::new(AddressId::new(1), draft));
/// assert_eq!(query.as_str(), "Elm 5, 1234AB Utrecht");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeQuery(String);

impl GeocodeQuery {
    /// Query text sent to the geocoder.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&Address> for GeocodeQuery {
    fn from(address: &Address) -> Self {
        Self(format!(
            "{} {}, {} {}",
            address.street(),
            address.number(),
            address.zip_code(),
            address.city()
        ))
    }
}

impl fmt::Display for GeocodeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

define_port_error! {
    /// Errors surfaced while resolving coordinates.
    pub enum GeocoderError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "geocoder transport failed: {message}",
        /// The geocoder did not answer within the configured timeout.
        Timeout { message: String } =>
            "geocoder timeout: {message}",
        /// The geocoder rate-limited the request.
        RateLimited { message: String } =>
            "geocoder rate limited request: {message}",
        /// The geocoder answered with a non-success status.
        Status { status: u16, message: String } =>
            "geocoder returned status {status}: {message}",
        /// The response body could not be decoded into coordinates.
        Decode { message: String } =>
            "geocoder response decode failed: {message}",
        /// The geocoder returned no candidates for the query.
        NoMatch { query: String } =>
            "no geocoding match for '{query}'",
    }
}

/// Port for address geocoding.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve the query to the first candidate's coordinates.
    async fn resolve(&self, query: &GeocodeQuery) -> Result<Coordinates, GeocoderError>;
}

/// Fixture geocoder that answers every query with the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixtureGeocoder {
    coordinates: Coordinates,
}

impl FixtureGeocoder {
    /// Answer every query with `coordinates`.
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl Geocoder for FixtureGeocoder {
    async fn resolve(&self, _query: &GeocodeQuery) -> Result<Coordinates, GeocoderError> {
        Ok(self.coordinates)
    }
}
