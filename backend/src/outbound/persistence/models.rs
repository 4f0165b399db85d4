//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;

use crate::domain::AddressDraft;

use super::schema::addresses;

/// Row read from the addresses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = addresses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AddressRow {
    pub id: i64,
    pub street: String,
    pub number: i32,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

/// Insertable row; the id is assigned by the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = addresses)]
pub(crate) struct NewAddressRow<'a> {
    pub street: &'a str,
    pub number: i32,
    pub zip_code: &'a str,
    pub city: &'a str,
    pub country: &'a str,
}

impl<'a> From<&'a AddressDraft> for NewAddressRow<'a> {
    fn from(draft: &'a AddressDraft) -> Self {
        Self {
            street: draft.street(),
            number: draft.number(),
            zip_code: draft.zip_code(),
            city: draft.city(),
            country: draft.country(),
        }
    }
}

/// Changeset replacing every mutable column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = addresses)]
pub(crate) struct AddressUpdate<'a> {
    pub street: &'a str,
    pub number: i32,
    pub zip_code: &'a str,
    pub city: &'a str,
    pub country: &'a str,
}

impl<'a> From<&'a AddressDraft> for AddressUpdate<'a> {
    fn from(draft: &'a AddressDraft) -> Self {
        Self {
            street: draft.street(),
            number: draft.number(),
            zip_code: draft.zip_code(),
            city: draft.city(),
            country: draft.country(),
        }
    }
}
