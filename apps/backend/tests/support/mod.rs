#![allow(dead_code)]

pub mod failing_store;
pub mod fixtures;

pub use failing_store::FailingStore;
pub use fixtures::{test_env, test_env_with, TestEnv};
