//! HTTP inbound adapter exposing REST endpoints.

pub mod addresses;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

use addresses::{
    ADDRESS_PATH, address_distance, create_address, delete_address, filter_addresses,
    get_address, list_addresses, sort_addresses, update_address,
};
use validation::{json_error_handler, path_error_handler};

/// Scope serving every address endpoint under `/api/address`.
///
/// Body and path extraction failures are rendered as `invalid_request`
/// errors. Fixed-prefix routes (`filter`, `sort`, `distance`) need more path
/// segments than `/{id}`, so registration order does not shadow them.
pub fn address_scope() -> actix_web::Scope {
    web::scope(ADDRESS_PATH)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(list_addresses)
        .service(create_address)
        .service(filter_addresses)
        .service(sort_addresses)
        .service(address_distance)
        .service(get_address)
        .service(update_address)
        .service(delete_address)
}
