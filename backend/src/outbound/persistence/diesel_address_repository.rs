//! PostgreSQL-backed `AddressRepository` implementation using Diesel ORM.
//!
//! Updates are a single `UPDATE … WHERE id`. When that touches no row the
//! adapter checks whether the record still exists to tell a missing record
//! from a lost write.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::{debug, warn};

use crate::domain::ports::{AddressRepository, AddressRepositoryError, UpdateOutcome};
use crate::domain::{Address, AddressDraft, AddressId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AddressRow, AddressUpdate, NewAddressRow};
use super::pool::{DbPool, PoolError};
use super::schema::addresses;

/// Diesel-backed implementation of the `AddressRepository` port.
#[derive(Clone)]
pub struct DieselAddressRepository {
    pool: DbPool,
}

impl DieselAddressRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AddressRepositoryError {
    map_basic_pool_error(error, AddressRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AddressRepositoryError {
    map_basic_diesel_error(
        error,
        AddressRepositoryError::query,
        AddressRepositoryError::connection,
    )
}

/// Convert a row into a domain address, re-checking the field invariants.
fn row_to_address(row: AddressRow) -> Result<Address, AddressRepositoryError> {
    let id = row.id;
    let draft = AddressDraft::new(row.street, row.number, row.zip_code, row.city, row.country)
        .map_err(|err| {
            warn!(address_id = id, error = %err, "stored address violates field rules");
            AddressRepositoryError::query(format!("stored address {id} is invalid: {err}"))
        })?;
    Ok(Address::new(AddressId::new(id), draft))
}

async fn row_exists<C>(conn: &mut C, id: AddressId) -> Result<bool, AddressRepositoryError>
where
    C: AsyncConnection<Backend = Pg> + Send,
{
    diesel::select(diesel::dsl::exists(addresses::table.find(id.get())))
        .get_result(conn)
        .await
        .map_err(map_diesel_error)
}

#[async_trait]
impl AddressRepository for DieselAddressRepository {
    async fn insert(&self, draft: &AddressDraft) -> Result<Address, AddressRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: AddressRow = diesel::insert_into(addresses::table)
            .values(NewAddressRow::from(draft))
            .returning(AddressRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(address_id = row.id, "address inserted");
        row_to_address(row)
    }

    async fn find_by_id(&self, id: AddressId) -> Result<Option<Address>, AddressRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AddressRow> = addresses::table
            .find(id.get())
            .select(AddressRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_address).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Address>, AddressRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AddressRow> = addresses::table
            .order(addresses::id.asc())
            .select(AddressRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_address).collect()
    }

    async fn update(
        &self,
        id: AddressId,
        draft: &AddressDraft,
    ) -> Result<UpdateOutcome, AddressRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changed = diesel::update(addresses::table.find(id.get()))
            .set(AddressUpdate::from(draft))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if changed > 0 {
            return Ok(UpdateOutcome::Updated);
        }

        if row_exists(&mut *conn, id).await? {
            Err(AddressRepositoryError::conflict(id.get()))
        } else {
            Ok(UpdateOutcome::Missing)
        }
    }

    async fn delete(&self, id: AddressId) -> Result<bool, AddressRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(addresses::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn exists(&self, id: AddressId) -> Result<bool, AddressRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        row_exists(&mut *conn, id).await
    }
}
