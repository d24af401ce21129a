//! Backend test support utilities
//!
//! Shared by the backend's unit tests and integration test binaries:
//! unified logging initialization and the common proptest configuration.

pub mod logging;
pub mod proptest_config;
