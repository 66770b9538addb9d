//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every extension route, the health probes, and the
//! schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it at `/docs` in debug builds; `openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::extensions::{ExtensionCreateBody, ExtensionUpdateBody, PasswordUpdateBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ExtensionSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PBX extensions API",
        description = "CRUD access to telephony extension records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::extensions::list_extensions,
        crate::inbound::http::extensions::get_extension,
        crate::inbound::http::extensions::create_extension,
        crate::inbound::http::extensions::update_extension,
        crate::inbound::http::extensions::delete_extension,
        crate::inbound::http::extensions::update_extension_password,
        crate::inbound::http::extensions::deactivate_extension,
        crate::inbound::http::extensions::activate_extension,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ExtensionSchema,
        ExtensionCreateBody,
        ExtensionUpdateBody,
        PasswordUpdateBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "extensions", description = "Extension records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
