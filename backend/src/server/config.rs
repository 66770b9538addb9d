//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use pbx_backend::outbound::persistence::DbPool;
use uuid::Uuid;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) domain_uuid: Uuid,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration without a database pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, domain_uuid: Uuid) -> Self {
        Self {
            bind_addr,
            domain_uuid,
            db_pool: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one the server keeps extensions in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by server bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
