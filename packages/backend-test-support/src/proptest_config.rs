//! Shared proptest configuration.
//!
//! Env knobs:
//! - `PROPTEST_CASES`: number of cases per property (default 64).
//! - `PROPTEST_MAX_SHRINK_MS`: optional cap for shrinking time in milliseconds.
//!
//! Generate valid inputs by construction rather than filtering with
//! `prop_assume!`.

use proptest::prelude::ProptestConfig;

const DEFAULT_CASES: u32 = 64;

pub fn proptest_config() -> ProptestConfig {
    let base = ProptestConfig::default();

    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_CASES)
        .max(1);

    let max_shrink_time = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // No regression files from the shared config
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
