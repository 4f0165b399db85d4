//! Geocoding outbound adapters.
//!
//! Provides a reqwest implementation of the `Geocoder` port against a
//! Nominatim-compatible search endpoint.

mod dto;
mod nominatim;

pub use nominatim::{DEFAULT_USER_AGENT, NominatimGeocoder};
