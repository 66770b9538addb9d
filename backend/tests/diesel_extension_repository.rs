//! Integration tests for `DieselExtensionRepository` against embedded PostgreSQL.
//!
//! Each test gets a temporary database with the embedded migrations applied,
//! then drives the repository through a dedicated Tokio runtime.

use pbx_backend::domain::ports::{ExtensionRepository, ExtensionRepositoryError};
use pbx_backend::domain::{
    DEFAULT_DOMAIN_UUID, Extension, ExtensionChanges, ExtensionDraft, ExtensionId, PageRequest,
};
use pbx_backend::outbound::persistence::{
    DbPool, DieselExtensionRepository, PoolConfig, apply_migrations,
};
use pg_embedded_setup_unpriv::{TemporaryDatabase, TestCluster};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{execute_sql, handle_cluster_setup_failure};

struct TestContext {
    runtime: Runtime,
    repository: DieselExtensionRepository,
    database_url: String,
    _database: TemporaryDatabase,
    _cluster: TestCluster,
}

impl TestContext {
    fn create(&self, extension: &str) -> Extension {
        self.runtime
            .block_on(self.repository.create(ExtensionDraft::new(extension, "x")))
            .expect("create extension")
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database = cluster
        .temporary_database(format!("extensions_{}", Uuid::new_v4().simple()).as_str())
        .map_err(|err| format!("{err:?}"))?;
    let database_url = database.url().to_string();

    let applied = apply_migrations(&database_url).map_err(|err| err.to_string())?;
    if applied == 0 {
        return Err("expected a fresh database to need migrations".to_owned());
    }

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        repository: DieselExtensionRepository::new(pool, DEFAULT_DOMAIN_UUID),
        database_url,
        _database: database,
        _cluster: cluster,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn create_then_find_round_trips_every_column(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };

    let mut draft = ExtensionDraft::new("1001", "secret");
    draft.number_alias = Some("501".to_owned());
    draft.effective_caller_id_name = Some("Reception".to_owned());
    draft.enabled = false;
    draft.description = Some("front desk".to_owned());

    let created = context
        .runtime
        .block_on(context.repository.create(draft))
        .expect("create extension");
    assert_eq!(created.domain_uuid, DEFAULT_DOMAIN_UUID);
    assert_eq!(created.number_alias.as_deref(), Some("501"));
    assert!(!created.enabled);

    let found = context
        .runtime
        .block_on(context.repository.find_by_id(&created.extension_uuid))
        .expect("find extension");
    assert_eq!(found, Some(created));
}

#[rstest]
fn list_returns_insertion_order_within_window(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let created: Vec<_> = ["1001", "1002", "1003", "1004"]
        .into_iter()
        .map(|number| context.create(number))
        .collect();

    let all = context
        .runtime
        .block_on(context.repository.list(PageRequest::default()))
        .expect("list extensions");
    assert_eq!(all, created);

    let window = context
        .runtime
        .block_on(context.repository.list(PageRequest::new(Some(1), Some(2))))
        .expect("list window");
    assert_eq!(window, created[1..3]);

    let past_end = context
        .runtime
        .block_on(context.repository.list(PageRequest::new(Some(10), None)))
        .expect("list past end");
    assert!(past_end.is_empty());
}

#[rstest]
fn update_sets_and_clears_only_supplied_columns(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let mut draft = ExtensionDraft::new("1001", "x");
    draft.accountcode = Some("acct".to_owned());
    let created = context
        .runtime
        .block_on(context.repository.create(draft))
        .expect("create extension");

    let changes = ExtensionChanges {
        accountcode: Some(None),
        description: Some(Some("front desk".to_owned())),
        ..ExtensionChanges::default()
    };
    let updated = context
        .runtime
        .block_on(context.repository.update(&created.extension_uuid, changes))
        .expect("update extension")
        .expect("extension exists");

    assert_eq!(updated.accountcode, None);
    assert_eq!(updated.description.as_deref(), Some("front desk"));
    assert_eq!(updated.extension, created.extension);
    assert_eq!(updated.password, created.password);

    let unchanged = context
        .runtime
        .block_on(
            context
                .repository
                .update(&created.extension_uuid, ExtensionChanges::default()),
        )
        .expect("empty update")
        .expect("extension exists");
    assert_eq!(unchanged, updated);
}

#[rstest]
fn password_and_enabled_mutations_touch_one_column(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let created = context.create("1001");
    let id = created.extension_uuid;

    let rekeyed = context
        .runtime
        .block_on(context.repository.update_password(&id, "s3cret".to_owned()))
        .expect("update password")
        .expect("extension exists");
    assert_eq!(rekeyed.password, "s3cret");
    assert!(rekeyed.enabled);

    let disabled = context
        .runtime
        .block_on(context.repository.set_enabled(&id, false))
        .expect("deactivate")
        .expect("extension exists");
    assert!(!disabled.enabled);
    assert_eq!(disabled.password, "s3cret");
}

#[rstest]
fn delete_removes_row_and_reports_snapshot(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let created = context.create("1001");
    let id = created.extension_uuid;

    let deleted = context
        .runtime
        .block_on(context.repository.delete(&id))
        .expect("delete extension");
    assert_eq!(deleted, Some(created));

    let again = context
        .runtime
        .block_on(context.repository.delete(&id))
        .expect("second delete");
    assert_eq!(again, None);
    let found = context
        .runtime
        .block_on(context.repository.find_by_id(&id))
        .expect("find after delete");
    assert_eq!(found, None);
}

#[rstest]
fn unknown_id_yields_none_for_id_operations(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    let id = ExtensionId::random();
    let repository = &context.repository;

    context.runtime.block_on(async {
        assert_eq!(repository.find_by_id(&id).await.expect("find"), None);
        let changes = ExtensionChanges {
            enabled: Some(false),
            ..ExtensionChanges::default()
        };
        assert_eq!(repository.update(&id, changes).await.expect("update"), None);
        assert_eq!(
            repository
                .update_password(&id, "x".to_owned())
                .await
                .expect("password"),
            None
        );
        assert_eq!(repository.set_enabled(&id, true).await.expect("enable"), None);
        assert_eq!(repository.delete(&id).await.expect("delete"), None);
    });
}

#[rstest]
fn missing_table_maps_to_query_error(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };
    execute_sql(&context.database_url, "DROP TABLE v_extensions;").expect("drop table");

    let error = context
        .runtime
        .block_on(context.repository.list(PageRequest::default()))
        .expect_err("list should fail without the table");

    assert!(matches!(error, ExtensionRepositoryError::Query { .. }));
}

#[rstest]
fn migrations_are_idempotent(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        return;
    };

    let applied = apply_migrations(&context.database_url).expect("re-run migrations");

    assert_eq!(applied, 0);
}
