//! Outbound adapters implementing the domain's driven ports.
//!
//! - [`persistence`]: PostgreSQL storage through Diesel.
//! - [`geocoding`]: HTTP geocoding through reqwest.

pub mod geocoding;
pub mod persistence;
