//! Address service library modules.
//!
//! The crate is laid out hexagonally: [`domain`] holds the types, service
//! and ports; [`inbound`] and [`outbound`] hold the adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
