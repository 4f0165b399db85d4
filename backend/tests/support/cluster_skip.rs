//! Policy for suites that need an embedded PostgreSQL cluster.
//!
//! Hosts without the PostgreSQL binaries (or a network to fetch them) skip
//! these suites unless `REQUIRE_TEST_CLUSTER` is truthy, in which case a
//! setup failure fails the test so CI breakage is not masked.

fn is_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Returns true when cluster setup failures must fail the test.
pub fn cluster_is_required() -> bool {
    is_truthy("REQUIRE_TEST_CLUSTER")
}

/// Handle an embedded cluster setup failure consistently.
///
/// Prints a skip marker and returns `None`, or panics when the cluster is
/// required.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if cluster_is_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
