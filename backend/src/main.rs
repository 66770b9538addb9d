//! Backend entry-point: loads configuration, prepares persistence, and serves
//! the extensions API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pbx_backend::inbound::http::health::HealthState;
use pbx_backend::outbound::persistence::{DbPool, PoolConfig, apply_migrations};
use pbx_backend::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let domain_uuid = settings.domain_uuid().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr, domain_uuid);
    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations() {
            migrate(database_url.to_owned()).await?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
        )
        .await
        .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, %domain_uuid, "listening");
    server.await
}

/// Apply pending migrations on a blocking thread.
async fn migrate(database_url: String) -> std::io::Result<()> {
    let applied = tokio::task::spawn_blocking(move || apply_migrations(&database_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;
    info!(applied, "database schema up to date");
    Ok(())
}
