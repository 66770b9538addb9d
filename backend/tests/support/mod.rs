//! Shared helpers for backend integration tests.
//!
//! Each file under `backend/tests/` compiles as its own crate, so common
//! helpers live here and are pulled in with `mod support;`.

mod cluster_skip;

pub use cluster_skip::handle_cluster_setup_failure;

/// Render a `postgres` error with its SQLSTATE and server message.
///
/// `Display` collapses database errors to `db error`, which hides the cause.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Run raw SQL against `url`, e.g. to break the schema under test.
pub fn execute_sql(url: &str, sql: &str) -> Result<(), String> {
    let mut client = postgres::Client::connect(url, postgres::NoTls)
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(sql)
        .map_err(|err| format_postgres_error(&err))
}
