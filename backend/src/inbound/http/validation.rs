//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns an `invalid_request` [`Error`] whose details name the
//! offending field and a machine-readable code, so clients can point at the
//! input that needs fixing.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError};
use serde_json::json;
use tracing::debug;

use crate::domain::{AddressField, AddressValidationError, Error, SortDirection};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankField,
    InvalidNumber,
    IdMismatch,
    InvalidSortField,
    InvalidSortDirection,
    MalformedBody,
    MalformedPath,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::BlankField => "blank_field",
            Self::InvalidNumber => "invalid_number",
            Self::IdMismatch => "id_mismatch",
            Self::InvalidSortField => "invalid_sort_field",
            Self::InvalidSortDirection => "invalid_sort_direction",
            Self::MalformedBody => "malformed_body",
            Self::MalformedPath => "malformed_path",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn blank_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must not be empty"))
        .with_code(ErrorCode::BlankField)
}

pub(crate) fn invalid_number_error(field: FieldName, value: i64) -> Error {
    let name = field.as_str();
    ValidationError::new(
        field,
        format!("{name} must be a positive integer no greater than {}", i32::MAX),
    )
    .with_value(ErrorCode::InvalidNumber, value.to_string())
}

pub(crate) fn id_mismatch_error(path_id: i64, body_id: Option<i64>) -> Error {
    let message = match body_id {
        Some(body_id) => format!("body id {body_id} does not match path id {path_id}"),
        None => format!("body id is required and must match path id {path_id}"),
    };
    ValidationError::new(FieldName::new("id"), message).with_value(
        ErrorCode::IdMismatch,
        body_id.map(|id| id.to_string()).unwrap_or_default(),
    )
}

/// Require an optional payload field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Convert a payload integer into a house number.
pub(crate) fn parse_house_number(value: i64, field: FieldName) -> Result<i32, Error> {
    i32::try_from(value).map_err(|_| invalid_number_error(field, value))
}

/// Translate a domain validation failure into an HTTP validation error.
pub(crate) fn address_validation_error(err: &AddressValidationError) -> Error {
    let field = FieldName::new(err.field());
    match err {
        AddressValidationError::BlankField { .. } => blank_field_error(field),
        AddressValidationError::NonPositiveNumber { value } => invalid_number_error(field, *value),
    }
}

/// Resolve a sort field name, ignoring case.
pub(crate) fn parse_sort_field(raw: &str) -> Result<AddressField, Error> {
    AddressField::parse(raw).ok_or_else(|| {
        let allowed: Vec<&str> = AddressField::ALL.iter().map(|f| f.name()).collect();
        ValidationError::new(
            FieldName::new("field"),
            format!("unknown sort field '{raw}'; expected one of {}", allowed.join(", ")),
        )
        .with_value(ErrorCode::InvalidSortField, raw)
    })
}

/// Resolve a sort direction, ignoring case.
pub(crate) fn parse_sort_direction(raw: &str) -> Result<SortDirection, Error> {
    SortDirection::parse(raw).ok_or_else(|| {
        ValidationError::new(
            FieldName::new("direction"),
            format!("sort direction must be 'ascending' or 'descending', got '{raw}'"),
        )
        .with_value(ErrorCode::InvalidSortDirection, raw)
    })
}

/// Render JSON body extraction failures as `invalid_request` errors.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected malformed JSON body");
    Error::invalid_request(format!("malformed request body: {err}"))
        .with_details(json!({ "code": ErrorCode::MalformedBody.as_str() }))
        .into()
}

/// Render path extraction failures (for example a non-numeric id) as
/// `invalid_request` errors.
pub(crate) fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected malformed path parameter");
    Error::invalid_request(format!("malformed path parameter: {err}"))
        .with_details(json!({ "code": ErrorCode::MalformedPath.as_str() }))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;
    use serde_json::Value;

    fn detail(error: &Error, key: &str) -> Value {
        error.details().expect("details attached")[key].clone()
    }

    #[rstest]
    fn missing_field_names_field() {
        let err = missing_field_error(FieldName::new("street"));
        assert_eq!(err.code(), DomainCode::InvalidRequest);
        assert_eq!(err.message(), "missing required field: street");
        assert_eq!(detail(&err, "code"), "missing_field");
    }

    #[rstest]
    fn house_number_within_i32_is_accepted() {
        let number = parse_house_number(12, FieldName::new("number")).expect("fits in i32");
        assert_eq!(number, 12);
    }

    #[rstest]
    #[case(i64::from(i32::MAX) + 1)]
    #[case(i64::from(i32::MIN) - 1)]
    fn house_number_outside_i32_is_rejected(#[case] value: i64) {
        let err = parse_house_number(value, FieldName::new("number")).expect_err("out of range");
        assert_eq!(detail(&err, "code"), "invalid_number");
        assert_eq!(detail(&err, "value"), value.to_string());
    }

    #[rstest]
    fn domain_blank_field_maps_to_field_detail() {
        let err = address_validation_error(&AddressValidationError::BlankField { field: "city" });
        assert_eq!(detail(&err, "field"), "city");
        assert_eq!(detail(&err, "code"), "blank_field");
    }

    #[rstest]
    fn domain_number_failure_keeps_value() {
        let err = address_validation_error(&AddressValidationError::NonPositiveNumber { value: -3 });
        assert_eq!(detail(&err, "field"), "number");
        assert_eq!(detail(&err, "value"), "-3");
    }

    #[rstest]
    #[case(Some(8), "body id 8 does not match path id 7")]
    #[case(None, "body id is required and must match path id 7")]
    fn id_mismatch_messages(#[case] body_id: Option<i64>, #[case] expected: &str) {
        let err = id_mismatch_error(7, body_id);
        assert_eq!(err.message(), expected);
        assert_eq!(detail(&err, "code"), "id_mismatch");
    }

    #[rstest]
    fn sort_field_error_lists_allowed_names() {
        let err = parse_sort_field("planet").expect_err("unknown field");
        assert!(err.message().contains("id, street, number, zipCode, city, country"));
        assert_eq!(detail(&err, "value"), "planet");
    }

    #[rstest]
    fn sort_direction_error_echoes_input() {
        let err = parse_sort_direction("sideways").expect_err("unknown direction");
        assert_eq!(detail(&err, "field"), "direction");
        assert_eq!(detail(&err, "code"), "invalid_sort_direction");
    }
}
