//! Test logging for the Ludo backend.
//!
//! One subscriber per test binary, installed from a `#[ctor::ctor]` hook.
//! Game-flow logs carry `session_id`/`player_id` fields; set
//! `LUDO_TEST_LOG_JSON=1` to see them as the JSON lines the simulator emits.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter directive: `TEST_LOG`, then `RUST_LOG`, then `warn`.
///
/// Blank values count as unset.
pub fn resolve_directive(test_log: Option<String>, rust_log: Option<String>) -> String {
    test_log
        .filter(|v| !v.trim().is_empty())
        .or_else(|| rust_log.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

fn json_requested(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some("1") | Some("true") | Some("yes")
    )
}

/// Initialize logging for tests. Idempotent; never panics if another
/// subscriber is already installed.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directive = resolve_directive(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let filter = EnvFilter::try_new(&directive)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time();

        let installed = if json_requested(std::env::var("LUDO_TEST_LOG_JSON").ok()) {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        installed.ok();
    });
}
