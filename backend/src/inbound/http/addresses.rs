//! Address HTTP handlers.
//!
//! ```text
//! GET    /api/address
//! GET    /api/address/{id}
//! POST   /api/address
//! PUT    /api/address/{id}
//! DELETE /api/address/{id}
//! GET    /api/address/filter/{value}
//! GET    /api/address/sort/{direction}/{field}
//! GET    /api/address/distance/{id1}/{id2}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Address, AddressDraft, AddressId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, address_validation_error, id_mismatch_error, parse_house_number,
    parse_sort_direction, parse_sort_field, require,
};

/// Path prefix shared by every address endpoint.
pub const ADDRESS_PATH: &str = "/api/address";

/// Request payload for creating or replacing an address.
///
/// Every field is optional at the wire level so missing values surface as
/// field-level validation errors instead of opaque deserialisation failures.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    /// Ignored on create; must equal the path id on update.
    #[schema(example = 7)]
    pub id: Option<i64>,
    /// Street name without the house number.
    #[schema(example = "Elm Street")]
    pub street: Option<String>,
    /// House number; must be positive and fit in 32 bits.
    #[schema(example = 5)]
    pub number: Option<i64>,
    /// Postal code.
    #[schema(example = "1012AB")]
    pub zip_code: Option<String>,
    /// City or town.
    #[schema(example = "Amsterdam")]
    pub city: Option<String>,
    /// Country name.
    #[schema(example = "Netherlands")]
    pub country: Option<String>,
}

/// Address record as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Street name.
    pub street: String,
    /// House number.
    pub number: i32,
    /// Postal code.
    pub zip_code: String,
    /// City or town.
    pub city: String,
    /// Country name.
    pub country: String,
}

impl From<Address> for AddressResponse {
    fn from(value: Address) -> Self {
        Self {
            id: value.id().get(),
            street: value.street().to_owned(),
            number: value.number(),
            zip_code: value.zip_code().to_owned(),
            city: value.city().to_owned(),
            country: value.country().to_owned(),
        }
    }
}

fn into_responses(addresses: Vec<Address>) -> Vec<AddressResponse> {
    addresses.into_iter().map(AddressResponse::from).collect()
}

/// Validate the payload fields into a draft. The `id` field is not inspected.
fn parse_address_request(payload: AddressRequest) -> Result<AddressDraft, Error> {
    let street = require(payload.street, FieldName::new("street"))?;
    let number = require(payload.number, FieldName::new("number"))?;
    let zip_code = require(payload.zip_code, FieldName::new("zipCode"))?;
    let city = require(payload.city, FieldName::new("city"))?;
    let country = require(payload.country, FieldName::new("country"))?;
    let number = parse_house_number(number, FieldName::new("number"))?;

    AddressDraft::new(street, number, zip_code, city, country)
        .map_err(|err| address_validation_error(&err))
}

/// List every stored address.
#[utoipa::path(
    get,
    path = "/api/address",
    responses(
        (status = 200, description = "All addresses", body = [AddressResponse]),
        (status = 503, description = "Address storage unavailable", body = ErrorSchema)
    ),
    tags = ["addresses"],
    operation_id = "listAddresses"
)]
#[get("")]
pub async fn list_addresses(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AddressResponse>>> {
    let addresses = state.addresses_query.list().await?;
    Ok(web::Json(into_responses(addresses)))
}

/// Fetch one address.
#[utoipa::path(
    get,
    path = "/api/address/{id}",
    params(("id" = i64, Path, description = "Address identifier")),
    responses(
        (status = 200, description = "The address", body = AddressResponse),
        (status = 404, description = "No such address", body = ErrorSchema)
    ),
    tags = ["addresses"],
    operation_id = "getAddress"
)]
#[get("/{id}")]
pub async fn get_address(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<AddressResponse>> {
    let address = state
        .addresses_query
        .get(AddressId::new(path.into_inner()))
        .await?;
    Ok(web::Json(AddressResponse::from(address)))
}

/// Create an address. Any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/address",
    request_body = AddressRequest,
    responses(
        (
            status = 201,
            description = "Address created",
            headers(("Location" = String, description = "URL of the new address")),
            body = AddressResponse
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Address storage unavailable", body = ErrorSchema)
    ),
    tags = ["addresses"],
    operation_id = "createAddress"
)]
#[post("")]
pub async fn create_address(
    state: web::Data<HttpState>,
    payload: web::Json<AddressRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_address_request(payload.into_inner())?;
    let address = state.addresses.create(draft).await?;
    let location = format!("{ADDRESS_PATH}/{}", address.id());
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(AddressResponse::from(address)))
}

/// Replace every field of an address.
#[utoipa::path(
    put,
    path = "/api/address/{id}",
    params(("id" = i64, Path, description = "Address identifier")),
    request_body = AddressRequest,
    responses(
        (status = 204, description = "Address updated"),
        (status = 400, description = "Invalid request or id mismatch", body = ErrorSchema),
        (status = 404, description = "No such address", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["addresses"],
    operation_id = "updateAddress"
)]
#[put("/{id}")]
pub async fn update_address(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<AddressRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    if payload.id != Some(id) {
        return Err(id_mismatch_error(id, payload.id));
    }
    let draft = parse_address_request(payload)?;
    state.addresses.update(AddressId::new(id), draft).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete an address.
#[utoipa::path(
    delete,
    path = "/api/address/{id}",
    params(("id" = i64, Path, description = "Address identifier")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "No such address", body = ErrorSchema)
    ),
    tags = ["addresses"],
    operation_id = "deleteAddress"
)]
#[delete("/{id}")]
pub async fn delete_address(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .addresses
        .delete(AddressId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Addresses with any field containing the value, ignoring case.
#[utoipa::path(
    get,
    path = "/api/address/filter/{value}",
    params(("value" = String, Path, description = "Fragment to look for in any field")),
    responses(
        (status = 200, description = "Matching addresses", body = [AddressResponse]),
        (status = 404, description = "Nothing matched", body = ErrorSchema)
    ),
    tags = ["addresses"],
    operation_id = "filterAddresses"
)]
#[get("/filter/{value}")]
pub async fn filter_addresses(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<AddressResponse>>> {
    let addresses = state.addresses_query.filter(&path.into_inner()).await?;
    Ok(web::Json(into_responses(addresses)))
}

/// Every address ordered by one field.
#[utoipa::path(
    get,
    path = "/api/address/sort/{direction}/{field}",
    params(
        ("direction" = String, Path, description = "`ascending` or `descending`"),
        ("field" = String, Path, description = "One of id, street, number, zipCode, city, country")
    ),
    responses(
        (status = 200, description = "Sorted addresses", body = [AddressResponse]),
        (status = 400, description = "Unknown field or direction", body = ErrorSchema)
    ),
    tags = ["addresses"],
    operation_id = "sortAddresses"
)]
#[get("/sort/{direction}/{field}")]
pub async fn sort_addresses(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<Vec<AddressResponse>>> {
    let (direction, field) = path.into_inner();
    let field = parse_sort_field(&field)?;
    let direction = parse_sort_direction(&direction)?;
    let addresses = state.addresses_query.sort(field, direction).await?;
    Ok(web::Json(into_responses(addresses)))
}

/// Great-circle distance in kilometres between two addresses.
#[utoipa::path(
    get,
    path = "/api/address/distance/{id1}/{id2}",
    params(
        ("id1" = i64, Path, description = "Origin address identifier"),
        ("id2" = i64, Path, description = "Destination address identifier")
    ),
    responses(
        (status = 200, description = "Distance in kilometres", body = f64),
        (status = 404, description = "Either address is missing", body = ErrorSchema),
        (status = 500, description = "Geocoding failed", body = ErrorSchema)
    ),
    tags = ["addresses"],
    operation_id = "addressDistance"
)]
#[get("/distance/{id1}/{id2}")]
pub async fn address_distance(
    state: web::Data<HttpState>,
    path: web::Path<(i64, i64)>,
) -> ApiResult<web::Json<f64>> {
    let (from, to) = path.into_inner();
    let kilometres = state
        .addresses_query
        .distance(AddressId::new(from), AddressId::new(to))
        .await?;
    Ok(web::Json(kilometres))
}

#[cfg(test)]
#[path = "addresses_tests.rs"]
mod tests;
