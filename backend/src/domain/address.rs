//! Address data model.
//!
//! An [`AddressDraft`] is a validated set of address fields without an
//! identifier. Storage assigns the identifier and hands back an [`Address`].

use std::fmt;

/// Validation errors returned by [`AddressDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressValidationError {
    /// A required text field was empty or whitespace.
    BlankField {
        /// Wire name of the blank field.
        field: &'static str,
    },
    /// The house number was zero or negative.
    NonPositiveNumber {
        /// The rejected number.
        value: i64,
    },
}

impl AddressValidationError {
    /// Wire name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankField { field } => field,
            Self::NonPositiveNumber { .. } => "number",
        }
    }
}

impl fmt::Display for AddressValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankField { field } => write!(f, "{field} must not be empty"),
            Self::NonPositiveNumber { value } => {
                write!(f, "number must be a positive integer, got {value}")
            }
        }
    }
}

impl std::error::Error for AddressValidationError {}

/// Storage-assigned address identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressId(i64);

impl AddressId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AddressId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Validated address fields awaiting an identifier.
///
/// ## Invariants
/// - `street`, `zip_code`, `city` and `country` are non-blank.
/// - `number` is strictly positive.
///
/// # Examples
/// ```
/// use address_service::domain::AddressDraft;
///
/// let draft = AddressDraft::new("Main St", 5, "1234AB", "Springfield", "US")
///     .expect("valid address");
/// assert_eq!(draft.number(), 5);
/// assert!(AddressDraft::new("Main St", 0, "1234AB", "Springfield", "US").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDraft {
    street: String,
    number: i32,
    zip_code: String,
    city: String,
    country: String,
}

fn require_text(field: &'static str, value: String) -> Result<String, AddressValidationError> {
    if value.trim().is_empty() {
        return Err(AddressValidationError::BlankField { field });
    }
    Ok(value)
}

impl AddressDraft {
    /// Validate and construct a draft. Fields are checked in declaration
    /// order and the first violation is reported.
    pub fn new(
        street: impl Into<String>,
        number: i32,
        zip_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, AddressValidationError> {
        let street = require_text("street", street.into())?;
        if number <= 0 {
            return Err(AddressValidationError::NonPositiveNumber {
                value: i64::from(number),
            });
        }
        Ok(Self {
            street,
            number,
            zip_code: require_text("zipCode", zip_code.into())?,
            city: require_text("city", city.into())?,
            country: require_text("country", country.into())?,
        })
    }

    /// Street name.
    pub fn street(&self) -> &str {
        self.street.as_str()
    }

    /// House number.
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Postal code.
    pub fn zip_code(&self) -> &str {
        self.zip_code.as_str()
    }

    /// City name.
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// Country name.
    pub fn country(&self) -> &str {
        self.country.as_str()
    }
}

/// Persisted address record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    id: AddressId,
    fields: AddressDraft,
}

impl Address {
    /// Attach a storage identifier to validated fields.
    pub fn new(id: AddressId, fields: AddressDraft) -> Self {
        Self { id, fields }
    }

    /// Storage identifier.
    pub fn id(&self) -> AddressId {
        self.id
    }

    /// Validated field values.
    pub fn fields(&self) -> &AddressDraft {
        &self.fields
    }

    /// Street name.
    pub fn street(&self) -> &str {
        self.fields.street()
    }

    /// House number.
    pub fn number(&self) -> i32 {
        self.fields.number()
    }

    /// Postal code.
    pub fn zip_code(&self) -> &str {
        self.fields.zip_code()
    }

    /// City name.
    pub fn city(&self) -> &str {
        self.fields.city()
    }

    /// Country name.
    pub fn country(&self) -> &str {
        self.fields.country()
    }
}
