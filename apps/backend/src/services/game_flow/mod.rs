//! Game flow orchestration service - bridges the pure rules with the session store.
//!
//! Each action is one atomic read-modify-write of a single session record.

mod mutation;
mod player_actions;

/// Game flow service - stateless; all shared resources come from `AppState`.
#[derive(Default)]
pub struct GameFlowService;

pub(crate) use mutation::{commit_update, log_transitions};
pub use mutation::GameFlowMutationResult;
pub(crate) use player_actions::ensure_active;
