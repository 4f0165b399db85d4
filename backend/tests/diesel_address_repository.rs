//! Contract tests for `DieselAddressRepository` against embedded PostgreSQL.
//!
//! Each test starts its own cluster, creates a database and applies the
//! embedded migrations before exercising the repository through the
//! `AddressRepository` port. Tests skip when no cluster can be started unless
//! `REQUIRE_TEST_CLUSTER` is set.

use address_service::domain::ports::{AddressRepository, AddressRepositoryError, UpdateOutcome};
use address_service::domain::{AddressDraft, AddressId};
use address_service::outbound::persistence::{
    DbPool, DieselAddressRepository, PoolConfig, run_pending_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::pg_embed::test_cluster;
use support::{connect, create_database, format_postgres_error, handle_cluster_setup_failure};

const DATABASE: &str = "address_repository";

struct TestContext {
    repository: DieselAddressRepository,
    runtime: Runtime,
    cluster: TestCluster,
}

impl TestContext {
    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn execute_sql(&self, sql: &str) -> Result<(), String> {
        connect(&self.cluster, DATABASE)?
            .batch_execute(sql)
            .map_err(|err| format_postgres_error(&err))
    }
}

fn setup_context() -> Result<TestContext, String> {
    let cluster = test_cluster()?;
    let database_url = create_database(&cluster, DATABASE)?;
    run_pending_migrations(&database_url).map_err(|err| err.to_string())?;

    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let pool = runtime
        .block_on(DbPool::new(PoolConfig::new(database_url).with_max_size(2)))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        repository: DieselAddressRepository::new(pool),
        runtime,
        cluster,
    })
}

#[fixture]
fn context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn draft(street: &str, number: i32, city: &str) -> AddressDraft {
    AddressDraft::new(street, number, "1012JS", city, "Netherlands").expect("valid draft")
}

#[rstest]
fn insert_assigns_identifiers_in_order(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let first = ctx
        .block_on(ctx.repository.insert(&draft("Dam", 1, "Amsterdam")))
        .expect("first insert");
    let second = ctx
        .block_on(ctx.repository.insert(&draft("Coolsingel", 40, "Rotterdam")))
        .expect("second insert");
    assert!(second.id() > first.id());

    let found = ctx
        .block_on(ctx.repository.find_by_id(first.id()))
        .expect("lookup")
        .expect("inserted row is visible");
    assert_eq!(found, first);

    let listed = ctx.block_on(ctx.repository.list_all()).expect("list");
    assert_eq!(listed, vec![first, second]);
}

#[rstest]
fn update_replaces_fields_or_reports_missing(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let stored = ctx
        .block_on(ctx.repository.insert(&draft("Dam", 1, "Amsterdam")))
        .expect("insert");
    let replacement = draft("Damrak", 70, "Amsterdam");

    let outcome = ctx
        .block_on(ctx.repository.update(stored.id(), &replacement))
        .expect("update");
    assert_eq!(outcome, UpdateOutcome::Updated);
    let reloaded = ctx
        .block_on(ctx.repository.find_by_id(stored.id()))
        .expect("lookup")
        .expect("row still exists");
    assert_eq!(reloaded.fields(), &replacement);

    let missing = ctx
        .block_on(ctx.repository.update(AddressId::new(9_999), &replacement))
        .expect("update of missing row");
    assert_eq!(missing, UpdateOutcome::Missing);
}

#[rstest]
fn delete_removes_the_row_once(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let stored = ctx
        .block_on(ctx.repository.insert(&draft("Dam", 1, "Amsterdam")))
        .expect("insert");
    assert!(ctx.block_on(ctx.repository.exists(stored.id())).expect("exists"));

    assert!(ctx.block_on(ctx.repository.delete(stored.id())).expect("delete"));
    assert!(!ctx.block_on(ctx.repository.delete(stored.id())).expect("second delete"));
    assert!(!ctx.block_on(ctx.repository.exists(stored.id())).expect("exists"));
    assert!(
        ctx.block_on(ctx.repository.find_by_id(stored.id()))
            .expect("lookup")
            .is_none()
    );
}

#[rstest]
fn table_constraints_reject_invalid_rows(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let zero_number = ctx.execute_sql(
        "INSERT INTO addresses (street, number, zip_code, city, country) \
         VALUES ('Dam', 0, '1012JS', 'Amsterdam', 'NL')",
    );
    assert!(zero_number.is_err(), "number must be positive");

    let blank_city = ctx.execute_sql(
        "INSERT INTO addresses (street, number, zip_code, city, country) \
         VALUES ('Dam', 1, '1012JS', '   ', 'NL')",
    );
    assert!(blank_city.is_err(), "city must not be blank");
}

#[rstest]
fn missing_table_is_a_query_error(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    ctx.execute_sql("DROP TABLE addresses").expect("drop table");

    let error = ctx
        .block_on(ctx.repository.list_all())
        .expect_err("table is gone");
    assert!(
        matches!(error, AddressRepositoryError::Query { .. }),
        "unexpected error: {error:?}"
    );
}

#[rstest]
fn migrations_are_idempotent(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let url = ctx.cluster.connection().database_url(DATABASE);
    let applied = run_pending_migrations(&url).expect("second migration run");
    assert_eq!(applied, 0);
}
