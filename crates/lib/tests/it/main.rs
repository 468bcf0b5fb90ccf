/*! Integration tests for dotmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - map: Tests for the Map and Value types, including serialization
 * - transform: Tests for the five transformation operations, one module per
 *   operation plus cross-operation property tests
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotmap=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}
