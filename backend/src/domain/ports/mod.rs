//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod address_command;
mod address_query;
mod address_repository;
mod geocoder;

#[cfg(test)]
pub use address_command::MockAddressCommand;
pub use address_command::{AddressCommand, FixtureAddressCommand};
#[cfg(test)]
pub use address_query::MockAddressQuery;
pub use address_query::{AddressQuery, FixtureAddressQuery};
#[cfg(test)]
pub use address_repository::MockAddressRepository;
pub use address_repository::{
    AddressRepository, AddressRepositoryError, FixtureAddressRepository, UpdateOutcome,
};
#[cfg(test)]
pub use geocoder::MockGeocoder;
pub use geocoder::{FixtureGeocoder, GeocodeQuery, Geocoder, GeocoderError};
