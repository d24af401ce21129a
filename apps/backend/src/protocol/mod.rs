//! Request and response shapes exchanged with clients.

pub mod requests;
pub mod responses;

pub use requests::{
    CreateGameRequest, EndSessionRequest, GameMode, JoinRequest, MoveRequest, RollRequest,
    StatusRequest, ValidatedRequest,
};
pub use responses::{
    JoinResponse, MoveResponse, RollResponse, SessionSnapshotResponse, StatusResponse,
};
