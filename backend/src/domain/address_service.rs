//! Address domain service.
//!
//! [`AddressService`] implements both address driving ports on top of the
//! repository and geocoder driven ports. Filtering and sorting run in memory
//! over the full record set; distance geocodes both records concurrently.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join;
use serde_json::json;
use tracing::{error, warn};

use crate::domain::ports::{
    AddressCommand, AddressQuery, AddressRepository, AddressRepositoryError, GeocodeQuery,
    Geocoder, UpdateOutcome,
};
use crate::domain::{
    Address, AddressDraft, AddressField, AddressId, Coordinates, Error, SortDirection,
    filter_by_any_field, haversine_km, sort_by_field,
};

fn map_repository_error(error: AddressRepositoryError) -> Error {
    match error {
        AddressRepositoryError::Connection { message } => {
            warn!(%message, "address repository unavailable");
            Error::service_unavailable(format!("address repository unavailable: {message}"))
        }
        AddressRepositoryError::Query { message } => {
            error!(%message, "address repository query failed");
            Error::internal(format!("address repository error: {message}"))
        }
        AddressRepositoryError::Conflict { id } => {
            error!(address_id = id, "address update lost to a concurrent change");
            Error::internal(format!("address {id} update conflicted with a concurrent change"))
        }
    }
}

fn not_found(id: AddressId) -> Error {
    Error::not_found(format!("address {id} not found"))
}

/// Address service implementing [`AddressCommand`] and [`AddressQuery`].
pub struct AddressService<R, G> {
    repository: Arc<R>,
    geocoder: Arc<G>,
}

impl<R, G> Clone for AddressService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            geocoder: Arc::clone(&self.geocoder),
        }
    }
}

impl<R, G> AddressService<R, G> {
    /// Create a service over the repository and geocoder.
    pub fn new(repository: Arc<R>, geocoder: Arc<G>) -> Self {
        Self {
            repository,
            geocoder,
        }
    }
}

impl<R, G> AddressService<R, G>
where
    R: AddressRepository,
    G: Geocoder,
{
    async fn require(&self, id: AddressId) -> Result<Address, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn locate(&self, address: &Address) -> Result<Coordinates, Error> {
        let query = GeocodeQuery::from(address);
        self.geocoder.resolve(&query).await.map_err(|err| {
            warn!(address_id = %address.id(), error = %err, "geocoding failed");
            Error::geocoding_failed(format!("could not geocode address {}", address.id()))
                .with_details(json!({
                    "addressId": address.id().get(),
                    "query": query.as_str(),
                    "reason": err.to_string(),
                }))
        })
    }
}

#[async_trait]
impl<R, G> AddressCommand for AddressService<R, G>
where
    R: AddressRepository,
    G: Geocoder,
{
    async fn create(&self, draft: AddressDraft) -> Result<Address, Error> {
        self.repository
            .insert(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn update(&self, id: AddressId, draft: AddressDraft) -> Result<(), Error> {
        match self
            .repository
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?
        {
            UpdateOutcome::Updated => Ok(()),
            UpdateOutcome::Missing => Err(not_found(id)),
        }
    }

    async fn delete(&self, id: AddressId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted { Ok(()) } else { Err(not_found(id)) }
    }
}

#[async_trait]
impl<R, G> AddressQuery for AddressService<R, G>
where
    R: AddressRepository,
    G: Geocoder,
{
    async fn list(&self) -> Result<Vec<Address>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_repository_error)
    }

    async fn get(&self, id: AddressId) -> Result<Address, Error> {
        self.require(id).await
    }

    async fn filter(&self, needle: &str) -> Result<Vec<Address>, Error> {
        let addresses = self.list().await?;
        let matches = filter_by_any_field(addresses, needle);
        if matches.is_empty() {
            return Err(Error::not_found(format!("no address matches '{needle}'")));
        }
        Ok(matches)
    }

    async fn sort(
        &self,
        field: AddressField,
        direction: SortDirection,
    ) -> Result<Vec<Address>, Error> {
        let mut addresses = self.list().await?;
        sort_by_field(&mut addresses, field, direction);
        Ok(addresses)
    }

    async fn distance(&self, from: AddressId, to: AddressId) -> Result<f64, Error> {
        let origin = self.require(from).await?;
        let destination = self.require(to).await?;
        let (start, end) = try_join(self.locate(&origin), self.locate(&destination)).await?;
        Ok(haversine_km(start, end))
    }
}

#[cfg(test)]
#[path = "address_service_tests.rs"]
mod tests;
