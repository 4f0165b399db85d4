//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AddressCommand, AddressQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, update and delete operations.
    pub addresses: Arc<dyn AddressCommand>,
    /// Read, filter, sort and distance operations.
    pub addresses_query: Arc<dyn AddressQuery>,
}

impl HttpState {
    /// Bundle the address driving ports.
    pub fn new(addresses: Arc<dyn AddressCommand>, addresses_query: Arc<dyn AddressQuery>) -> Self {
        Self {
            addresses,
            addresses_query,
        }
    }
}
