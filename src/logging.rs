//! Structured logging setup.
//!
//! The lexer, parser and grammar engine emit `tracing` events (`trace` per lexical rule dispatch, `debug` per
//! grammar fixed-point round and per parse). Nothing is printed unless a subscriber is installed.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatting subscriber filtered by `RUST_LOG` (falling back to [`DEFAULT_FILTER`]).
///
/// ## Notes
/// - Safe to call more than once; only the first call installs a subscriber.
pub fn init() {
    init_with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)));
}

/// Install a formatting subscriber with an explicit filter directive, e.g. `cherry_syntax=trace`.
pub fn init_with(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Subscriber for tests: writes through the test harness capture and never fails if one is already installed.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_for_tests();
        init_for_tests();
        init();
        tracing::debug!("still running");
    }
}
