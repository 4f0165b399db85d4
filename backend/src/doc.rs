//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every address and health endpoint plus the schema
//! wrappers that describe domain types without coupling them to utoipa.
//!
//! The generated document backs Swagger UI (debug builds) and is exported
//! with `cargo run --bin openapi-dump`.

use crate::inbound::http::addresses::{AddressRequest, AddressResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Address service API",
        description = "CRUD over postal addresses with filtering, sorting and geocoded distances."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::addresses::list_addresses,
        crate::inbound::http::addresses::get_address,
        crate::inbound::http::addresses::create_address,
        crate::inbound::http::addresses::update_address,
        crate::inbound::http::addresses::delete_address,
        crate::inbound::http::addresses::filter_addresses,
        crate::inbound::http::addresses::sort_addresses,
        crate::inbound::http::addresses::address_distance,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(AddressRequest, AddressResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "addresses", description = "Address records and derived views"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
