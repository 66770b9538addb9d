//! PBX extensions backend.
//!
//! A ports-and-adapters service exposing CRUD over telephony extension
//! records: [`domain`] holds the record, errors, and use-cases; [`inbound`]
//! the Actix Web adapter; [`outbound`] the Diesel persistence adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
