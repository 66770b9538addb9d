//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PBX_*` environment variables, or a config
//! file, in OrthoConfig's usual precedence. Every field is optional; the
//! accessors supply defaults and validate formats.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::DEFAULT_DOMAIN_UUID;
use crate::outbound::persistence::DEFAULT_POOL_MAX_SIZE;

/// Listen address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised when a configured value has the wrong shape.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        /// Configured value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },
    /// `domain_uuid` is not a UUID.
    #[error("invalid domain uuid {value:?}: {source}")]
    InvalidDomainUuid {
        /// Configured value.
        value: String,
        /// Parse failure.
        source: uuid::Error,
    },
}

/// Runtime configuration for the extensions service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PBX")]
pub struct AppSettings {
    /// PostgreSQL URL. Without it records are kept in memory.
    pub database_url: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Grouping key stamped on new extensions.
    pub domain_uuid: Option<String>,
    /// Apply pending schema migrations at startup.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Configured database URL, ignoring blank values.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Listen address, defaulting to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] for unparsable values.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Pool size, defaulting to [`DEFAULT_POOL_MAX_SIZE`].
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Grouping key, defaulting to [`DEFAULT_DOMAIN_UUID`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidDomainUuid`] for unparsable values.
    pub fn domain_uuid(&self) -> Result<Uuid, SettingsError> {
        match self.domain_uuid.as_deref() {
            None => Ok(DEFAULT_DOMAIN_UUID),
            Some(value) => {
                Uuid::parse_str(value).map_err(|source| SettingsError::InvalidDomainUuid {
                    value: value.to_owned(),
                    source,
                })
            }
        }
    }

    /// Whether to migrate the schema at startup. Defaults to `true`.
    #[must_use]
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }
}
