//! Request validation helpers for the HTTP adapter.
//!
//! Path identifiers arrive as raw strings and are parsed here so malformed
//! values produce a structured `invalid_request` error instead of Actix's
//! plain-text 404. Body and query extractor failures are routed through the
//! same error shape.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, ExtensionId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidUuid,
    InvalidBody,
    InvalidQuery,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidBody => "invalid_body",
            Self::InvalidQuery => "invalid_query",
        }
    }
}

/// Name of a request field, as seen by clients.
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

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ValidationCode::InvalidUuid.as_str(),
    }))
}

/// Parse a path segment into an [`ExtensionId`].
pub(crate) fn parse_extension_id(value: &str, field: FieldName) -> Result<ExtensionId, Error> {
    ExtensionId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

fn extractor_error(message: String, code: ValidationCode) -> actix_web::Error {
    debug!(%message, code = code.as_str(), "rejecting malformed request");
    Error::invalid_request(message)
        .with_details(json!({ "code": code.as_str() }))
        .into()
}

/// Error handler for `web::JsonConfig`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    extractor_error(
        format!("invalid JSON body: {err}"),
        ValidationCode::InvalidBody,
    )
}

/// Error handler for `web::QueryConfig`.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    extractor_error(
        format!("invalid query string: {err}"),
        ValidationCode::InvalidQuery,
    )
}
