//! Services - compose domain rules with the session store per client action.

pub mod game_flow;
pub mod sessions;

pub use game_flow::GameFlowService;
pub use sessions::SessionService;
