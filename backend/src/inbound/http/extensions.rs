//! Extension HTTP handlers.
//!
//! ```text
//! GET    /extensions/?skip=&limit=
//! POST   /extensions/
//! GET    /extensions/{extension_uuid}
//! PUT    /extensions/{extension_uuid}
//! DELETE /extensions/{extension_uuid}
//! PUT    /extensions/{extension_uuid}/password
//! PUT    /extensions/{extension_uuid}/deactivate
//! PUT    /extensions/{extension_uuid}/activate
//! ```
//!
//! Responses carry the stored record with snake_case column names. Every
//! id-addressed route answers 404 `Extension not found` for unknown ids.
//! The collection is also served at `/extensions`, without redirecting.

use actix_web::{delete, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Extension, ExtensionChanges, ExtensionDraft, ExtensionId, PageRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::coerce;
use crate::inbound::http::schemas::{ErrorSchema, ExtensionSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, json_error_handler, parse_extension_id, query_error_handler,
};

const EXTENSION_UUID: FieldName = FieldName::new("extension_uuid");

/// The collection answers with and without the trailing slash.
const COLLECTION_PATHS: [&str; 2] = ["/extensions/", "/extensions"];

/// Query parameters for listing extensions.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListExtensionsQuery {
    /// Records to skip. Defaults to 0.
    #[param(minimum = 0, example = 0)]
    pub skip: Option<u32>,
    /// Maximum records to return. Defaults to 100.
    #[param(minimum = 0, example = 100)]
    pub limit: Option<u32>,
}

/// Request payload for creating an extension.
///
/// Unknown fields are ignored. Text fields also accept JSON numbers.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ExtensionCreateBody {
    /// Dialable extension number.
    #[schema(example = "1001")]
    #[serde(deserialize_with = "coerce::string")]
    pub extension: String,
    /// SIP registration secret.
    #[serde(deserialize_with = "coerce::string")]
    pub password: String,
    /// Alternative number routed to this extension.
    #[serde(default, deserialize_with = "coerce::optional_string")]
    pub number_alias: Option<String>,
    /// Billing account code.
    #[serde(default, deserialize_with = "coerce::optional_string")]
    pub accountcode: Option<String>,
    /// Caller name presented on internal calls.
    #[serde(default, deserialize_with = "coerce::optional_string")]
    pub effective_caller_id_name: Option<String>,
    /// Caller number presented on internal calls.
    #[serde(default, deserialize_with = "coerce::optional_string")]
    pub effective_caller_id_number: Option<String>,
    /// Caller name presented on external calls.
    #[serde(default, deserialize_with = "coerce::optional_string")]
    pub outbound_caller_id_name: Option<String>,
    /// Caller number presented on external calls.
    #[serde(default, deserialize_with = "coerce::optional_string")]
    pub outbound_caller_id_number: Option<String>,
    /// Defaults to `true`.
    pub enabled: Option<bool>,
    /// Free-form note.
    #[serde(default, deserialize_with = "coerce::optional_string")]
    pub description: Option<String>,
}

impl From<ExtensionCreateBody> for ExtensionDraft {
    fn from(body: ExtensionCreateBody) -> Self {
        Self {
            extension: body.extension,
            number_alias: body.number_alias,
            password: body.password,
            accountcode: body.accountcode,
            effective_caller_id_name: body.effective_caller_id_name,
            effective_caller_id_number: body.effective_caller_id_number,
            outbound_caller_id_name: body.outbound_caller_id_name,
            outbound_caller_id_number: body.outbound_caller_id_number,
            enabled: body.enabled.unwrap_or(true),
            description: body.description,
        }
    }
}

/// Request payload for a partial update.
///
/// Omitted fields are left unchanged. `null` clears the optional text
/// fields; for `extension`, `password`, and `enabled` it counts as omitted.
/// Text fields also accept JSON numbers.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ExtensionUpdateBody {
    /// Dialable extension number.
    #[serde(default, deserialize_with = "coerce::optional_string")]
    pub extension: Option<String>,
    /// Alternative number; `null` clears it.
    #[serde(default, deserialize_with = "coerce::present_optional_string")]
    #[schema(value_type = Option<String>)]
    pub number_alias: Option<Option<String>>,
    /// SIP registration secret.
    #[serde(default, deserialize_with = "coerce::optional_string")]
    pub password: Option<String>,
    /// Billing account code; `null` clears it.
    #[serde(default, deserialize_with = "coerce::present_optional_string")]
    #[schema(value_type = Option<String>)]
    pub accountcode: Option<Option<String>>,
    /// Internal caller name; `null` clears it.
    #[serde(default, deserialize_with = "coerce::present_optional_string")]
    #[schema(value_type = Option<String>)]
    pub effective_caller_id_name: Option<Option<String>>,
    /// Internal caller number; `null` clears it.
    #[serde(default, deserialize_with = "coerce::present_optional_string")]
    #[schema(value_type = Option<String>)]
    pub effective_caller_id_number: Option<Option<String>>,
    /// External caller name; `null` clears it.
    #[serde(default, deserialize_with = "coerce::present_optional_string")]
    #[schema(value_type = Option<String>)]
    pub outbound_caller_id_name: Option<Option<String>>,
    /// External caller number; `null` clears it.
    #[serde(default, deserialize_with = "coerce::present_optional_string")]
    #[schema(value_type = Option<String>)]
    pub outbound_caller_id_number: Option<Option<String>>,
    /// Whether the extension may register.
    pub enabled: Option<bool>,
    /// Free-form note; `null` clears it.
    #[serde(default, deserialize_with = "coerce::present_optional_string")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl From<ExtensionUpdateBody> for ExtensionChanges {
    fn from(body: ExtensionUpdateBody) -> Self {
        Self {
            extension: body.extension,
            number_alias: body.number_alias,
            password: body.password,
            accountcode: body.accountcode,
            effective_caller_id_name: body.effective_caller_id_name,
            effective_caller_id_number: body.effective_caller_id_number,
            outbound_caller_id_name: body.outbound_caller_id_name,
            outbound_caller_id_number: body.outbound_caller_id_number,
            enabled: body.enabled,
            description: body.description,
        }
    }
}

/// Request payload for replacing an extension's password.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PasswordUpdateBody {
    /// New SIP registration secret. JSON numbers are accepted.
    #[serde(deserialize_with = "coerce::string")]
    pub new_password: String,
}

/// Register the extension routes and their extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use pbx_backend::inbound::http::extensions::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::resource(COLLECTION_PATHS)
                .route(web::get().to(list_extensions))
                .route(web::post().to(create_extension)),
        )
        .service(get_extension)
        .service(update_extension)
        .service(delete_extension)
        .service(update_extension_password)
        .service(deactivate_extension)
        .service(activate_extension);
}

fn extension_id(path: web::Path<String>) -> ApiResult<ExtensionId> {
    parse_extension_id(&path.into_inner(), EXTENSION_UUID)
}

/// List extensions in insertion order.
#[utoipa::path(
    get,
    path = "/extensions/",
    params(ListExtensionsQuery),
    responses(
        (status = 200, description = "Page of extensions", body = [ExtensionSchema]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["extensions"],
    operation_id = "listExtensions"
)]
pub async fn list_extensions(
    state: web::Data<HttpState>,
    query: web::Query<ListExtensionsQuery>,
) -> ApiResult<web::Json<Vec<Extension>>> {
    let ListExtensionsQuery { skip, limit } = query.into_inner();
    let extensions = state
        .extensions
        .list_extensions(PageRequest::new(skip, limit))
        .await?;
    Ok(web::Json(extensions))
}

/// Fetch one extension.
#[utoipa::path(
    get,
    path = "/extensions/{extension_uuid}",
    params(("extension_uuid" = String, Path, description = "Extension UUID")),
    responses(
        (status = 200, description = "Extension", body = ExtensionSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Extension not found", body = ErrorSchema)
    ),
    tags = ["extensions"],
    operation_id = "getExtension"
)]
#[get("/extensions/{extension_uuid}")]
pub async fn get_extension(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Extension>> {
    let id = extension_id(path)?;
    let extension = state.extensions.get_extension(&id).await?;
    Ok(web::Json(extension))
}

/// Create an extension.
#[utoipa::path(
    post,
    path = "/extensions/",
    request_body = ExtensionCreateBody,
    responses(
        (status = 200, description = "Created extension", body = ExtensionSchema),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["extensions"],
    operation_id = "createExtension"
)]
pub async fn create_extension(
    state: web::Data<HttpState>,
    payload: web::Json<ExtensionCreateBody>,
) -> ApiResult<web::Json<Extension>> {
    let draft = ExtensionDraft::from(payload.into_inner());
    let created = state.extension_commands.create_extension(draft).await?;
    Ok(web::Json(created))
}

/// Apply a partial update.
#[utoipa::path(
    put,
    path = "/extensions/{extension_uuid}",
    params(("extension_uuid" = String, Path, description = "Extension UUID")),
    request_body = ExtensionUpdateBody,
    responses(
        (status = 200, description = "Updated extension", body = ExtensionSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Extension not found", body = ErrorSchema)
    ),
    tags = ["extensions"],
    operation_id = "updateExtension"
)]
#[put("/extensions/{extension_uuid}")]
pub async fn update_extension(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ExtensionUpdateBody>,
) -> ApiResult<web::Json<Extension>> {
    let id = extension_id(path)?;
    let changes = ExtensionChanges::from(payload.into_inner());
    let updated = state
        .extension_commands
        .update_extension(&id, changes)
        .await?;
    Ok(web::Json(updated))
}

/// Delete an extension, returning its last stored state.
#[utoipa::path(
    delete,
    path = "/extensions/{extension_uuid}",
    params(("extension_uuid" = String, Path, description = "Extension UUID")),
    responses(
        (status = 200, description = "Deleted extension", body = ExtensionSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Extension not found", body = ErrorSchema)
    ),
    tags = ["extensions"],
    operation_id = "deleteExtension"
)]
#[delete("/extensions/{extension_uuid}")]
pub async fn delete_extension(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Extension>> {
    let id = extension_id(path)?;
    let deleted = state.extension_commands.delete_extension(&id).await?;
    Ok(web::Json(deleted))
}

/// Replace an extension's password.
#[utoipa::path(
    put,
    path = "/extensions/{extension_uuid}/password",
    params(("extension_uuid" = String, Path, description = "Extension UUID")),
    request_body = PasswordUpdateBody,
    responses(
        (status = 200, description = "Updated extension", body = ExtensionSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Extension not found", body = ErrorSchema)
    ),
    tags = ["extensions"],
    operation_id = "updateExtensionPassword"
)]
#[put("/extensions/{extension_uuid}/password")]
pub async fn update_extension_password(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PasswordUpdateBody>,
) -> ApiResult<web::Json<Extension>> {
    let id = extension_id(path)?;
    let PasswordUpdateBody { new_password } = payload.into_inner();
    let updated = state
        .extension_commands
        .update_password(&id, new_password)
        .await?;
    Ok(web::Json(updated))
}

/// Disable an extension.
#[utoipa::path(
    put,
    path = "/extensions/{extension_uuid}/deactivate",
    params(("extension_uuid" = String, Path, description = "Extension UUID")),
    responses(
        (status = 200, description = "Disabled extension", body = ExtensionSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Extension not found", body = ErrorSchema)
    ),
    tags = ["extensions"],
    operation_id = "deactivateExtension"
)]
#[put("/extensions/{extension_uuid}/deactivate")]
pub async fn deactivate_extension(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Extension>> {
    let id = extension_id(path)?;
    let updated = state.extension_commands.deactivate_extension(&id).await?;
    Ok(web::Json(updated))
}

/// Enable an extension.
#[utoipa::path(
    put,
    path = "/extensions/{extension_uuid}/activate",
    params(("extension_uuid" = String, Path, description = "Extension UUID")),
    responses(
        (status = 200, description = "Enabled extension", body = ExtensionSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Extension not found", body = ErrorSchema)
    ),
    tags = ["extensions"],
    operation_id = "activateExtension"
)]
#[put("/extensions/{extension_uuid}/activate")]
pub async fn activate_extension(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Extension>> {
    let id = extension_id(path)?;
    let updated = state.extension_commands.activate_extension(&id).await?;
    Ok(web::Json(updated))
}

#[cfg(test)]
#[path = "extensions_tests.rs"]
mod tests;
