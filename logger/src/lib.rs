//! The `logger` module configures `env_logger` for Amplify binaries and
//! tests. Filters follow the usual `RUST_LOG` syntax, e.g.
//! `amplify_registry=debug,info`.

use std::env;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Environment variable consulted for the filter.
pub const FILTER_ENV: &str = "RUST_LOG";

fn builder(filter: &str) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filter).format_timestamp_millis();
    builder
}

/// Install a logger using `filter`, ignoring `RUST_LOG`.
///
/// Only the first installed logger takes effect for the process; later
/// calls are no-ops.
pub fn setup_with(filter: &str) {
    let _ = builder(filter).try_init();
}

/// Install a logger using `RUST_LOG`, falling back to `filter`.
pub fn setup_with_default(filter: &str) {
    let filter = env::var(FILTER_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| filter.to_string());
    setup_with(&filter);
}

/// Install a logger using `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn setup() {
    setup_with_default(DEFAULT_FILTER);
}

/// Logger for `#[test]` functions: output is captured by the test harness
/// and repeated calls from parallel tests are harmless.
pub fn setup_for_tests() {
    let filter = env::var(FILTER_ENV).unwrap_or_else(|_| "warn".to_string());
    let _ = builder(&filter).is_test(true).try_init();
}
