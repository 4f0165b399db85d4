//! Field table used by the filter and sort operations.
//!
//! Each [`AddressField`] maps a wire name to an accessor over [`Address`].
//! Lookups by name are ASCII case-insensitive. Filtering matches a
//! case-insensitive substring of any field's textual form.

use std::cmp::Ordering;
use std::fmt;

use super::Address;

/// Value of one address field, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    /// Integer-valued field (`id`, `number`).
    Integer(i64),
    /// Text-valued field, compared ordinally.
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Whether the textual form of the value contains `lowered_fragment`,
    /// which the caller has already lowercased.
    pub fn contains_lowercase(&self, lowered_fragment: &str) -> bool {
        match self {
            Self::Integer(value) => value.to_string().contains(lowered_fragment),
            Self::Text(value) => value.to_lowercase().contains(lowered_fragment),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Address field addressable by filter and sort requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// Storage identifier.
    Id,
    /// Street name.
    Street,
    /// House number.
    Number,
    /// Postal code.
    ZipCode,
    /// City name.
    City,
    /// Country name.
    Country,
}

impl AddressField {
    /// Every field in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Street,
        Self::Number,
        Self::ZipCode,
        Self::City,
        Self::Country,
    ];

    /// Wire name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Street => "street",
            Self::Number => "number",
            Self::ZipCode => "zipCode",
            Self::City => "city",
            Self::Country => "country",
        }
    }

    /// Resolve a field by name, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use address_service::domain::AddressField;
    ///
    /// assert_eq!(AddressField::parse("ZIPCODE"), Some(AddressField::ZipCode));
    /// assert_eq!(AddressField::parse("planet"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }

    /// Read this field from an address.
    pub fn value(self, address: &Address) -> FieldValue<'_> {
        match self {
            Self::Id => FieldValue::Integer(address.id().get()),
            Self::Street => FieldValue::Text(address.street()),
            Self::Number => FieldValue::Integer(i64::from(address.number())),
            Self::ZipCode => FieldValue::Text(address.zip_code()),
            Self::City => FieldValue::Text(address.city()),
            Self::Country => FieldValue::Text(address.country()),
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort order requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Parse `ascending` or `descending`, ignoring ASCII case.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("ascending") {
            Some(Self::Ascending)
        } else if raw.eq_ignore_ascii_case("descending") {
            Some(Self::Descending)
        } else {
            None
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Keep the addresses where at least one field contains `fragment`,
/// ignoring case.
pub fn filter_by_any_field(addresses: Vec<Address>, fragment: &str) -> Vec<Address> {
    let fragment = fragment.to_lowercase();
    addresses
        .into_iter()
        .filter(|address| {
            AddressField::ALL
                .into_iter()
                .any(|field| field.value(address).contains_lowercase(&fragment))
        })
        .collect()
}

/// Stable sort by one field. Records with equal keys keep their input order
/// in both directions.
pub fn sort_by_field(addresses: &mut [Address], field: AddressField, direction: SortDirection) {
    addresses.sort_by(|left, right| direction.apply(field.value(left).cmp(&field.value(right))));
}
