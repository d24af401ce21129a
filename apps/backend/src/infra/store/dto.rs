//! DTOs for the session store.

use time::OffsetDateTime;

use crate::entities::sessions::SessionStatus;

/// DTO for inserting a new session.
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub host_id: i64,
    pub players: Vec<i64>,
    pub turn: i32,
    pub game_prize: i64,
    pub status: SessionStatus,
    pub min_players: i16,
    pub max_players: i16,
    pub grace_until: Option<OffsetDateTime>,
    pub game_state: Option<String>,
}

impl SessionCreate {
    /// A PENDING session seating only its host.
    pub fn pending(host_id: i64, grace_until: OffsetDateTime) -> Self {
        Self {
            host_id,
            players: vec![host_id],
            turn: 0,
            game_prize: 0,
            status: SessionStatus::Pending,
            min_players: 2,
            max_players: 4,
            grace_until: Some(grace_until),
            game_state: None,
        }
    }

    /// An ACTIVE session that starts with the given state.
    pub fn active(host_id: i64, players: Vec<i64>, game_state: String) -> Self {
        Self {
            host_id,
            players,
            turn: 0,
            game_prize: 0,
            status: SessionStatus::Active,
            min_players: 2,
            max_players: 4,
            grace_until: None,
            game_state: Some(game_state),
        }
    }

    pub fn with_player_bounds(mut self, min_players: i16, max_players: i16) -> Self {
        self.min_players = min_players;
        self.max_players = max_players;
        self
    }

    pub fn with_prize(mut self, game_prize: i64) -> Self {
        self.game_prize = game_prize;
        self
    }
}

/// Unified DTO for updating session fields with optimistic locking.
///
/// Any combination of fields is applied atomically with a single version
/// increment. `expected_version` must match the stored `lock_version`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    pub id: i64,
    pub expected_version: i32,
    pub players: Option<Vec<i64>>,
    pub turn: Option<i32>,
    pub status: Option<SessionStatus>,
    /// Three-state: None = no change, Some(Some(ts)) = set, Some(None) = clear.
    pub grace_until: Option<Option<OffsetDateTime>>,
    pub winner_id: Option<Option<i64>>,
    pub game_state: Option<String>,
}

impl SessionUpdate {
    pub fn new(id: i64, expected_version: i32) -> Self {
        Self {
            id,
            expected_version,
            players: None,
            turn: None,
            status: None,
            grace_until: None,
            winner_id: None,
            game_state: None,
        }
    }

    pub fn with_players(mut self, players: Vec<i64>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn with_turn(mut self, turn: i32) -> Self {
        self.turn = Some(turn);
        self
    }

    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_grace_until(mut self, grace_until: Option<OffsetDateTime>) -> Self {
        self.grace_until = Some(grace_until);
        self
    }

    pub fn with_winner(mut self, winner_id: i64) -> Self {
        self.winner_id = Some(Some(winner_id));
        self
    }

    pub fn with_game_state(mut self, game_state: String) -> Self {
        self.game_state = Some(game_state);
        self
    }
}
