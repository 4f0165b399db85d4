//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Stored postal addresses. `id` is a `BIGSERIAL` and never reused.
    addresses (id) {
        id -> Int8,
        street -> Text,
        number -> Int4,
        zip_code -> Text,
        city -> Text,
        country -> Text,
    }
}
