//! Port for address persistence.
//!
//! The [`AddressRepository`] trait is the contract between the address
//! service and durable storage. Adapters assign identifiers on insert and
//! report missing rows through return values rather than errors. A write
//! that matches no row although the row exists is reported as
//! [`AddressRepositoryError::Conflict`].

use async_trait::async_trait;

use crate::domain::{Address, AddressDraft, AddressId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by address repository adapters.
    pub enum AddressRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "address repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "address repository query failed: {message}",
        /// An update matched no row although the record still exists.
        Conflict { id: i64 } =>
            "update of address {id} conflicted with a concurrent change",
    }
}

/// Result of an update attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The stored record now holds the new fields.
    Updated,
    /// No record has the identifier.
    Missing,
}

/// Port for address storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Persist a new record and return it with its assigned identifier.
    async fn insert(&self, draft: &AddressDraft) -> Result<Address, AddressRepositoryError>;

    /// Fetch one record. Returns `None` when no record has the identifier.
    async fn find_by_id(&self, id: AddressId) -> Result<Option<Address>, AddressRepositoryError>;

    /// Fetch every record in identifier order.
    async fn list_all(&self) -> Result<Vec<Address>, AddressRepositoryError>;

    /// Replace every field of an existing record. When no row is affected
    /// the adapter checks [`AddressRepository::exists`] to tell a missing
    /// record from a conflict.
    async fn update(
        &self,
        id: AddressId,
        draft: &AddressDraft,
    ) -> Result<UpdateOutcome, AddressRepositoryError>;

    /// Remove a record. Returns `false` when nothing was deleted.
    async fn delete(&self, id: AddressId) -> Result<bool, AddressRepositoryError>;

    /// Whether a record with the identifier exists.
    async fn exists(&self, id: AddressId) -> Result<bool, AddressRepositoryError>;
}

/// Fixture implementation for testing without a real database.
///
/// Lookups find nothing, inserts echo the draft back with identifier 1 and
/// mutations report that no row was touched.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAddressRepository;

#[async_trait]
impl AddressRepository for FixtureAddressRepository {
    async fn insert(&self, draft: &AddressDraft) -> Result<Address, AddressRepositoryError> {
        Ok(Address::new(AddressId::new(1), draft.clone()))
    }

    async fn find_by_id(&self, _id: AddressId) -> Result<Option<Address>, AddressRepositoryError> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<Address>, AddressRepositoryError> {
        Ok(Vec::new())
    }

    async fn update(
        &self,
        _id: AddressId,
        _draft: &AddressDraft,
    ) -> Result<UpdateOutcome, AddressRepositoryError> {
        Ok(UpdateOutcome::Missing)
    }

    async fn delete(&self, _id: AddressId) -> Result<bool, AddressRepositoryError> {
        Ok(false)
    }

    async fn exists(&self, _id: AddressId) -> Result<bool, AddressRepositoryError> {
        Ok(false)
    }
}
