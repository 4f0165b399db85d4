//! Domain primitives, services and ports.
//!
//! Purpose: define the address model and the rules applied to it, independent
//! of HTTP and storage. Inbound adapters call the driving ports in [`ports`];
//! outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Address, AddressDraft, AddressId: validated address records.
//! - AddressField, SortDirection: field table for filter and sort.
//! - Coordinates, haversine_km: geographic distance.
//! - AddressService: implementation of the address driving ports.
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - TraceId: request correlation identifier.

pub mod address;
pub mod address_field;
pub mod address_service;
pub mod error;
pub mod geo;
pub mod ports;
pub mod trace_id;

pub use self::address::{Address, AddressDraft, AddressId, AddressValidationError};
pub use self::address_field::{
    AddressField, FieldValue, SortDirection, filter_by_any_field, sort_by_field,
};
pub use self::address_service::AddressService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::geo::{Coordinates, CoordinatesValidationError, EARTH_RADIUS_KM, haversine_km};
pub use self::trace_id::TraceId;
