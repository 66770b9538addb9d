//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; the wrappers here mirror their
//! serialised shape so the HTTP adapter owns all utoipa concerns.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails type checks.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A dependency is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Extension not found")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "6f1c2e0a-4a59-4c55-9d1f-1f3c3f4b8e2a")]
    trace_id: Option<String>,
    /// Supplementary error details.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Extension`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Extension)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExtensionSchema {
    /// Primary key.
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    extension_uuid: String,
    /// Grouping key.
    #[schema(format = "uuid", example = "664882d5-e861-47aa-b57b-9128631a5837")]
    domain_uuid: String,
    /// Dialable extension number.
    #[schema(example = "1001")]
    extension: String,
    number_alias: Option<String>,
    password: String,
    accountcode: Option<String>,
    effective_caller_id_name: Option<String>,
    effective_caller_id_number: Option<String>,
    outbound_caller_id_name: Option<String>,
    outbound_caller_id_number: Option<String>,
    enabled: bool,
    description: Option<String>,
}
