//! Extension use-cases.
//!
//! [`ExtensionService`] implements the driving ports on top of an
//! [`ExtensionRepository`], translating absent rows into `not_found` and
//! repository failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    ExtensionCommand, ExtensionQuery, ExtensionRepository, ExtensionRepositoryError,
};
use crate::domain::{Error, Extension, ExtensionChanges, ExtensionDraft, ExtensionId, PageRequest};

/// Message returned for every id-addressed miss.
pub const EXTENSION_NOT_FOUND: &str = "Extension not found";

/// Extension service implementing [`ExtensionQuery`] and [`ExtensionCommand`].
#[derive(Clone)]
pub struct ExtensionService<R> {
    repository: Arc<R>,
}

impl<R> ExtensionService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: ExtensionRepositoryError) -> Error {
    match error {
        ExtensionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("extension repository unavailable: {message}"))
        }
        ExtensionRepositoryError::Query { message } => {
            Error::internal(format!("extension repository error: {message}"))
        }
    }
}

fn require(found: Option<Extension>) -> Result<Extension, Error> {
    found.ok_or_else(|| Error::not_found(EXTENSION_NOT_FOUND))
}

#[async_trait]
impl<R> ExtensionQuery for ExtensionService<R>
where
    R: ExtensionRepository,
{
    async fn list_extensions(&self, page: PageRequest) -> Result<Vec<Extension>, Error> {
        debug!(skip = page.skip(), limit = page.limit(), "listing extensions");
        self.repository
            .list(page)
            .await
            .map_err(map_repository_error)
    }

    async fn get_extension(&self, id: &ExtensionId) -> Result<Extension, Error> {
        debug!(extension_uuid = %id, "fetching extension");
        let found = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?;
        require(found)
    }
}

#[async_trait]
impl<R> ExtensionCommand for ExtensionService<R>
where
    R: ExtensionRepository,
{
    async fn create_extension(&self, draft: ExtensionDraft) -> Result<Extension, Error> {
        let created = self
            .repository
            .create(draft)
            .await
            .map_err(map_repository_error)?;
        info!(
            extension_uuid = %created.extension_uuid,
            extension = %created.extension,
            "extension created"
        );
        Ok(created)
    }

    async fn update_extension(
        &self,
        id: &ExtensionId,
        changes: ExtensionChanges,
    ) -> Result<Extension, Error> {
        let updated = self
            .repository
            .update(id, changes)
            .await
            .map_err(map_repository_error)?;
        let updated = require(updated)?;
        info!(extension_uuid = %id, "extension updated");
        Ok(updated)
    }

    async fn update_password(
        &self,
        id: &ExtensionId,
        password: String,
    ) -> Result<Extension, Error> {
        let updated = self
            .repository
            .update_password(id, password)
            .await
            .map_err(map_repository_error)?;
        let updated = require(updated)?;
        info!(extension_uuid = %id, "extension password changed");
        Ok(updated)
    }

    async fn activate_extension(&self, id: &ExtensionId) -> Result<Extension, Error> {
        let updated = self
            .repository
            .set_enabled(id, true)
            .await
            .map_err(map_repository_error)?;
        let updated = require(updated)?;
        info!(extension_uuid = %id, "extension activated");
        Ok(updated)
    }

    async fn deactivate_extension(&self, id: &ExtensionId) -> Result<Extension, Error> {
        let updated = self
            .repository
            .set_enabled(id, false)
            .await
            .map_err(map_repository_error)?;
        let updated = require(updated)?;
        info!(extension_uuid = %id, "extension deactivated");
        Ok(updated)
    }

    async fn delete_extension(&self, id: &ExtensionId) -> Result<Extension, Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        let deleted = require(deleted)?;
        info!(extension_uuid = %id, "extension deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
#[path = "extension_service_tests.rs"]
mod tests;
