use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Matchmaking/game lifecycle of a session row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Pending,
    Active,
    Expired,
    Completed,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Expired | SessionStatus::Completed)
    }
}

/// Persisted shape of a game session.
///
/// `players` keeps seat order (index = turn index); `game_state` is the
/// JSON-encoded `GameState`, absent until the session first activates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Model {
    pub id: i64,
    pub host_id: i64,
    pub players: Vec<i64>,
    pub turn: i32,
    pub game_prize: i64,
    pub status: SessionStatus,
    pub min_players: i16,
    pub max_players: i16,
    #[serde(with = "time::serde::rfc3339::option")]
    pub grace_until: Option<OffsetDateTime>,
    pub winner_id: Option<i64>,
    pub game_state: Option<String>,
    pub lock_version: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
