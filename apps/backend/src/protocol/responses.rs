//! Outbound response DTOs, serialized in camelCase.

use serde::Serialize;

use crate::domain::board_path::Coord;
use crate::domain::state::{GameState, PlayerId};
use crate::domain::tokens::{TokenId, TokenPosition};
use crate::entities::sessions::SessionStatus;
use crate::repos::sessions::Session;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub session_id: i64,
    pub status: SessionStatus,
    pub participant_ids: Vec<PlayerId>,
    pub version: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub session_id: i64,
    pub status: SessionStatus,
    pub participant_ids: Vec<PlayerId>,
    pub participant_count: usize,
    pub min_players: usize,
    pub max_players: usize,
    pub seconds_remaining: i64,
    pub is_active: bool,
    pub version: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResponse {
    pub session_id: i64,
    pub dice_value: u8,
    /// Empty when the turn passed.
    pub eligible_token_ids: Vec<TokenId>,
    pub turn_passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_player_id: Option<PlayerId>,
    pub version: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub session_id: i64,
    pub token_id: TokenId,
    pub new_steps: u8,
    pub new_position: TokenPosition,
    pub coordinate: Option<Coord>,
    pub captured: bool,
    pub captured_count: usize,
    pub bonus_turn: bool,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_player_id: Option<PlayerId>,
    pub game_state: GameState,
    pub version: i32,
}

/// Full view of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshotResponse {
    pub session_id: i64,
    pub status: SessionStatus,
    pub host_id: PlayerId,
    pub participant_ids: Vec<PlayerId>,
    pub turn: usize,
    pub current_player_id: Option<PlayerId>,
    pub game_prize: i64,
    pub winner_id: Option<PlayerId>,
    pub version: i32,
    pub game_state: Option<GameState>,
}

impl From<Session> for SessionSnapshotResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.id,
            status: session.status,
            host_id: session.host_id,
            current_player_id: session.current_player(),
            participant_ids: session.players,
            turn: session.turn,
            game_prize: session.game_prize,
            winner_id: session.winner_id,
            version: session.lock_version,
            game_state: session.game_state,
        }
    }
}

impl From<&Session> for JoinResponse {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id,
            status: session.status,
            participant_ids: session.players.clone(),
            version: session.lock_version,
        }
    }
}
