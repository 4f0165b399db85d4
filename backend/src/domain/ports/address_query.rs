//! Driving port for address reads.
//!
//! Covers plain lookups as well as the derived views: value filtering,
//! field sorting and geocoded distance.

use async_trait::async_trait;

use crate::domain::{Address, AddressField, AddressId, Error, SortDirection};

/// Domain use-case port for reading addresses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressQuery: Send + Sync {
    /// Every stored address in identifier order.
    async fn list(&self) -> Result<Vec<Address>, Error>;

    /// One address by identifier.
    async fn get(&self, id: AddressId) -> Result<Address, Error>;

    /// Addresses with at least one field whose textual form contains
    /// `needle`, ignoring case. An empty match is reported as not found.
    async fn filter(&self, needle: &str) -> Result<Vec<Address>, Error>;

    /// Every address ordered by one field.
    async fn sort(&self, field: AddressField, direction: SortDirection)
    -> Result<Vec<Address>, Error>;

    /// Great-circle distance in kilometres between two stored addresses.
    async fn distance(&self, from: AddressId, to: AddressId) -> Result<f64, Error>;
}

/// Fixture query over an empty address book.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAddressQuery;

#[async_trait]
impl AddressQuery for FixtureAddressQuery {
    async fn list(&self) -> Result<Vec<Address>, Error> {
        Ok(Vec::new())
    }

    async fn get(&self, id: AddressId) -> Result<Address, Error> {
        Err(Error::not_found(format!("address {id} not found")))
    }

    async fn filter(&self, needle: &str) -> Result<Vec<Address>, Error> {
        Err(Error::not_found(format!("no address matches '{needle}'")))
    }

    async fn sort(
        &self,
        _field: AddressField,
        _direction: SortDirection,
    ) -> Result<Vec<Address>, Error> {
        Ok(Vec::new())
    }

    async fn distance(&self, from: AddressId, _to: AddressId) -> Result<f64, Error> {
        Err(Error::not_found(format!("address {from} not found")))
    }
}
