//! Builders for the shared HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;
use uuid::Uuid;

use pbx_backend::domain::ExtensionService;
use pbx_backend::domain::ports::{ExtensionRepository, FixtureExtensionRepository};
use pbx_backend::inbound::http::state::HttpState;
use pbx_backend::outbound::persistence::{DbPool, DieselExtensionRepository};

use super::ServerConfig;

/// Wrap `repository` in the extension service and expose it through both ports.
fn state_for<R>(repository: R) -> HttpState
where
    R: ExtensionRepository + 'static,
{
    HttpState::from_service(Arc::new(ExtensionService::new(Arc::new(repository))))
}

/// Select the Diesel adapter when a pool is present, otherwise the in-memory
/// fixture.
fn build_extension_state(pool: Option<&DbPool>, domain_uuid: Uuid) -> HttpState {
    match pool {
        Some(pool) => state_for(DieselExtensionRepository::new(pool.clone(), domain_uuid)),
        None => {
            warn!("no database configured; extensions are held in memory");
            state_for(FixtureExtensionRepository::new(domain_uuid))
        }
    }
}

/// Build the shared HTTP state from the server configuration.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(build_extension_state(
        config.db_pool.as_ref(),
        config.domain_uuid,
    ))
}
