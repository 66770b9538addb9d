//! PostgreSQL-backed `ExtensionRepository` implementation using Diesel ORM.
//!
//! Every operation is a single statement. Updates and deletes use
//! `RETURNING` so the caller gets the affected row, or `None` when the id
//! matched nothing.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{ExtensionRepository, ExtensionRepositoryError};
use crate::domain::{Extension, ExtensionChanges, ExtensionDraft, ExtensionId, PageRequest};

use super::models::{ExtensionChangeset, ExtensionRow, NewExtensionRow};
use super::pool::{DbPool, PoolError};
use super::schema::v_extensions;

/// Diesel-backed implementation of the `ExtensionRepository` port.
#[derive(Clone)]
pub struct DieselExtensionRepository {
    pool: DbPool,
    domain_uuid: Uuid,
}

impl DieselExtensionRepository {
    /// Create a repository that stamps `domain_uuid` on new rows.
    pub fn new(pool: DbPool, domain_uuid: Uuid) -> Self {
        Self { pool, domain_uuid }
    }
}

fn map_pool_error(error: PoolError) -> ExtensionRepositoryError {
    ExtensionRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> ExtensionRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ExtensionRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => {
            ExtensionRepositoryError::query("database query error")
        }
        _ => ExtensionRepositoryError::query("database error"),
    }
}

#[async_trait]
impl ExtensionRepository for DieselExtensionRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Extension>, ExtensionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ExtensionRow> = v_extensions::table
            .order((v_extensions::insert_date.asc(), v_extensions::extension_uuid.asc()))
            .offset(i64::from(page.skip()))
            .limit(i64::from(page.limit()))
            .select(ExtensionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Extension::from).collect())
    }

    async fn find_by_id(
        &self,
        id: &ExtensionId,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ExtensionRow> = v_extensions::table
            .find(*id.as_uuid())
            .select(ExtensionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Extension::from))
    }

    async fn create(&self, draft: ExtensionDraft) -> Result<Extension, ExtensionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewExtensionRow::from_draft(Uuid::new_v4(), self.domain_uuid, &draft);

        let row: ExtensionRow = diesel::insert_into(v_extensions::table)
            .values(&new_row)
            .returning(ExtensionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: &ExtensionId,
        changes: ExtensionChanges,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ExtensionRow> = diesel::update(v_extensions::table.find(*id.as_uuid()))
            .set(ExtensionChangeset::from(&changes))
            .returning(ExtensionRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Extension::from))
    }

    async fn update_password(
        &self,
        id: &ExtensionId,
        password: String,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ExtensionRow> = diesel::update(v_extensions::table.find(*id.as_uuid()))
            .set(v_extensions::password.eq(password))
            .returning(ExtensionRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Extension::from))
    }

    async fn set_enabled(
        &self,
        id: &ExtensionId,
        enabled: bool,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ExtensionRow> = diesel::update(v_extensions::table.find(*id.as_uuid()))
            .set(v_extensions::enabled.eq(enabled))
            .returning(ExtensionRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Extension::from))
    }

    async fn delete(
        &self,
        id: &ExtensionId,
    ) -> Result<Option<Extension>, ExtensionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ExtensionRow> = diesel::delete(v_extensions::table.find(*id.as_uuid()))
            .returning(ExtensionRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Extension::from))
    }
}
