//! Driving port for extension mutations.

use async_trait::async_trait;

use crate::domain::{Error, Extension, ExtensionChanges, ExtensionDraft, ExtensionId};

/// Write-side use-cases for extensions.
///
/// Every id-addressed operation fails with `not_found` when the record does
/// not exist and otherwise returns the record as stored after the change.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtensionCommand: Send + Sync {
    /// Create an extension from `draft`.
    async fn create_extension(&self, draft: ExtensionDraft) -> Result<Extension, Error>;

    /// Apply a partial update.
    async fn update_extension(
        &self,
        id: &ExtensionId,
        changes: ExtensionChanges,
    ) -> Result<Extension, Error>;

    /// Replace the password.
    async fn update_password(&self, id: &ExtensionId, password: String)
    -> Result<Extension, Error>;

    /// Mark the extension enabled.
    async fn activate_extension(&self, id: &ExtensionId) -> Result<Extension, Error>;

    /// Mark the extension disabled.
    async fn deactivate_extension(&self, id: &ExtensionId) -> Result<Extension, Error>;

    /// Delete the extension, returning its last stored state.
    async fn delete_extension(&self, id: &ExtensionId) -> Result<Extension, Error>;
}
