//! Driven port for extension persistence and its in-memory fixture.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    DEFAULT_DOMAIN_UUID, Extension, ExtensionChanges, ExtensionDraft, ExtensionId, PageRequest,
};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by extension repository adapters.
    pub enum ExtensionRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Pool or driver error text.
            message: String,
        } => "extension repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Database error text.
            message: String,
        } => "extension repository query failed: {message}",
    }
}

/// Persistence contract for the extensions table.
///
/// Id-addressed operations return `Ok(None)` when no row matches; turning
/// that into a not-found error is the caller's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtensionRepository: Send + Sync {
    /// Return a page of extensions in insertion order.
    async fn list(&self, page: PageRequest) -> Result<Vec<Extension>, ExtensionRepositoryError>;

    /// Fetch one extension by identifier.
    async fn find_by_id(
        &self,
        id: &ExtensionId,
    ) -> Result<Option<Extension>, ExtensionRepositoryError>;

    /// Insert a new extension, assigning its identifier and grouping key.
    async fn create(&self, draft: ExtensionDraft) -> Result<Extension, ExtensionRepositoryError>;

    /// Apply a partial update. An empty changeset performs no write.
    async fn update(
        &self,
        id: &ExtensionId,
        changes: ExtensionChanges,
    ) -> Result<Option<Extension>, ExtensionRepositoryError>;

    /// Replace the password column only.
    async fn update_password(
        &self,
        id: &ExtensionId,
        password: String,
    ) -> Result<Option<Extension>, ExtensionRepositoryError>;

    /// Replace the enabled flag only.
    async fn set_enabled(
        &self,
        id: &ExtensionId,
        enabled: bool,
    ) -> Result<Option<Extension>, ExtensionRepositoryError>;

    /// Remove an extension, returning the record as it was before removal.
    async fn delete(&self, id: &ExtensionId)
    -> Result<Option<Extension>, ExtensionRepositoryError>;
}

/// In-memory repository used when no database is configured and in tests.
///
/// Records are kept in insertion order so listings match the SQL adapter.
#[derive(Debug)]
pub struct FixtureExtensionRepository {
    domain_uuid: Uuid,
    records: Mutex<Vec<Extension>>,
}

impl FixtureExtensionRepository {
    /// Create an empty store assigning `domain_uuid` to new records.
    #[must_use]
    pub fn new(domain_uuid: Uuid) -> Self {
        Self {
            domain_uuid,
            records: Mutex::new(Vec::new()),
        }
    }

    fn records(&self) -> MutexGuard<'_, Vec<Extension>> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn modify(
        &self,
        id: &ExtensionId,
        edit: impl FnOnce(&mut Extension),
    ) -> Option<Extension> {
        let mut records = self.records();
        let record = records.iter_mut().find(|r| r.extension_uuid == *id)?;
        edit(record);
        Some(record.clone())
    }
}

impl Default for FixtureExtensionRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN_UUID)
    }
}

#[async_trait]
impl ExtensionRepository for FixtureExtensionRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Extension>, ExtensionRepositoryError> {
        let records = self.records();
        Ok(records
            .iter()
            .skip(usize::try_from(page.skip()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: &ExtensionId,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        Ok(self
            .records()
            .iter()
            .find(|r| r.extension_uuid == *id)
            .cloned())
    }

    async fn create(&self, draft: ExtensionDraft) -> Result<Extension, ExtensionRepositoryError> {
        let extension = draft.into_extension(ExtensionId::random(), self.domain_uuid);
        self.records().push(extension.clone());
        Ok(extension)
    }

    async fn update(
        &self,
        id: &ExtensionId,
        changes: ExtensionChanges,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        Ok(self.modify(id, |record| changes.apply_to(record)))
    }

    async fn update_password(
        &self,
        id: &ExtensionId,
        password: String,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        Ok(self.modify(id, |record| record.password = password))
    }

    async fn set_enabled(
        &self,
        id: &ExtensionId,
        enabled: bool,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        Ok(self.modify(id, |record| record.enabled = enabled))
    }

    async fn delete(
        &self,
        id: &ExtensionId,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        let mut records = self.records();
        let position = records.iter().position(|r| r.extension_uuid == *id);
        Ok(position.map(|index| records.remove(index)))
    }
}
