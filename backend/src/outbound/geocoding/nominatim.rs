//! Reqwest-backed Nominatim geocoder adapter.
//!
//! Owns transport details only: query encoding, identity headers, timeout
//! and status mapping, and decoding the first search candidate.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::PlaceDto;
use crate::domain::Coordinates;
use crate::domain::ports::{GeocodeQuery, Geocoder, GeocoderError};

/// User agent sent when none is configured. Nominatim's usage policy
/// rejects anonymous clients.
pub const DEFAULT_USER_AGENT: &str = "address-service/0.1";

/// Geocoder issuing `GET {endpoint}?q=…&format=json` requests.
pub struct NominatimGeocoder {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl NominatimGeocoder {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: user_agent.into(),
        })
    }

    /// Search endpoint this adapter queries.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, query: &GeocodeQuery) -> Result<Coordinates, GeocoderError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query.as_str()), ("format", "json")])
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let coordinates = parse_first_place(body.as_ref(), query)?;
        debug!(
            query = query.as_str(),
            latitude = coordinates.latitude(),
            longitude = coordinates.longitude(),
            "geocoded address"
        );
        Ok(coordinates)
    }
}

fn parse_first_place(body: &[u8], query: &GeocodeQuery) -> Result<Coordinates, GeocoderError> {
    let places: Vec<PlaceDto> = serde_json::from_slice(body).map_err(|error| {
        GeocoderError::decode(format!("invalid Nominatim JSON payload: {error}"))
    })?;
    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| GeocoderError::no_match(query.as_str()))?;
    place.into_coordinates().map_err(GeocoderError::decode)
}

fn map_transport_error(error: reqwest::Error) -> GeocoderError {
    if error.is_timeout() {
        GeocoderError::timeout(error.to_string())
    } else {
        GeocoderError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GeocoderError {
    let message = body_preview(body);
    match status {
        StatusCode::TOO_MANY_REQUESTS => GeocoderError::rate_limited(if message.is_empty() {
            format!("status {}", status.as_u16())
        } else {
            message
        }),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            GeocoderError::timeout(format!("status {}", status.as_u16()))
        }
        _ => GeocoderError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
