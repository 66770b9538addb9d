//! HTTP inbound adapter exposing the extensions REST API and health probes.

pub(crate) mod coerce;
pub mod error;
pub mod extensions;
pub mod health;
pub mod schemas;
pub mod state;
pub(crate) mod validation;

pub use error::ApiResult;
