//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so tests can swap in fixtures or mocks.

use std::sync::Arc;

use crate::domain::ports::{ExtensionCommand, ExtensionQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side extension use-cases.
    pub extensions: Arc<dyn ExtensionQuery>,
    /// Write-side extension use-cases.
    pub extension_commands: Arc<dyn ExtensionCommand>,
}

impl HttpState {
    /// Bundle the query and command ports.
    pub fn new(
        extensions: Arc<dyn ExtensionQuery>,
        extension_commands: Arc<dyn ExtensionCommand>,
    ) -> Self {
        Self {
            extensions,
            extension_commands,
        }
    }

    /// Use one service for both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use pbx_backend::domain::ExtensionService;
    /// use pbx_backend::domain::ports::FixtureExtensionRepository;
    /// use pbx_backend::inbound::http::state::HttpState;
    ///
    /// let service = ExtensionService::new(Arc::new(FixtureExtensionRepository::default()));
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ExtensionQuery + ExtensionCommand + 'static,
    {
        Self::new(service.clone(), service)
    }
}
