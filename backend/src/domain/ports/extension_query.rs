//! Driving port for extension reads.
//!
//! Inbound adapters depend on this trait rather than on the repository so
//! that not-found handling and error mapping stay in the domain.

use async_trait::async_trait;

use crate::domain::{Error, Extension, ExtensionId, PageRequest};

/// Read-side use-cases for extensions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtensionQuery: Send + Sync {
    /// List extensions in insertion order within `page`.
    async fn list_extensions(&self, page: PageRequest) -> Result<Vec<Extension>, Error>;

    /// Fetch one extension, failing with `not_found` when absent.
    async fn get_extension(&self, id: &ExtensionId) -> Result<Extension, Error>;
}
