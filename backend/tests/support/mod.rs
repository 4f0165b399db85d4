//! Shared helpers for integration tests that need PostgreSQL.

pub mod cluster_skip;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

/// Render a `postgres` error with the SQLSTATE and server message.
///
/// The `Display` implementation often collapses database errors to a bare
/// `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!("postgres error {:?}: {}", db_error.code(), db_error.message());
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Open a blocking client on a database of the cluster.
pub fn connect(cluster: &TestCluster, database: &str) -> Result<Client, String> {
    let url = cluster.connection().database_url(database);
    Client::connect(&url, NoTls).map_err(|err| format_postgres_error(&err))
}

/// Create a fresh empty database and return its URL.
pub fn create_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let mut admin = connect(cluster, "postgres")?;
    // Separate statements: CREATE DATABASE cannot run in an implicit transaction.
    for statement in [
        format!("DROP DATABASE IF EXISTS \"{name}\""),
        format!("CREATE DATABASE \"{name}\""),
    ] {
        admin
            .batch_execute(&statement)
            .map_err(|err| format_postgres_error(&err))?;
    }
    Ok(cluster.connection().database_url(name))
}
