//! Inbound request DTOs.
//!
//! Parsing and validation failures both surface as `INVALID_INPUT`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::domain::state::PlayerId;
use crate::domain::tokens::{TokenId, DIE_FACES};
use crate::error::AppError;

/// A request body that can be parsed from JSON and checked before use.
pub trait ValidatedRequest: DeserializeOwned {
    fn validate(&self) -> Result<(), AppError>;

    fn from_json(raw: &str) -> Result<Self, AppError> {
        let request: Self = serde_json::from_str(raw).map_err(|e| {
            debug!(error = %e, "rejecting malformed request body");
            AppError::invalid_input(format!("Malformed request: {e}"))
        })?;
        request.validate()?;
        Ok(request)
    }
}

fn positive(field: &str, value: i64) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::invalid_input(format!(
            "{field} must be a positive id, got {value}"
        )));
    }
    Ok(())
}

fn die_value(value: u8) -> Result<(), AppError> {
    if !DIE_FACES.contains(&value) {
        return Err(AppError::invalid_input(format!(
            "diceValue must be within 1..=6, got {value}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub player_id: PlayerId,
}

impl ValidatedRequest for JoinRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive("playerId", self.player_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    pub session_id: i64,
}

impl ValidatedRequest for StatusRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive("sessionId", self.session_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollRequest {
    pub session_id: i64,
    pub player_id: PlayerId,
    /// When present, must equal the session's current version.
    #[serde(default)]
    pub expected_version: Option<i32>,
}

impl ValidatedRequest for RollRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive("sessionId", self.session_id)?;
        positive("playerId", self.player_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub session_id: i64,
    pub player_id: PlayerId,
    pub token_id: TokenId,
    pub dice_value: u8,
    #[serde(default)]
    pub expected_version: Option<i32>,
}

impl ValidatedRequest for MoveRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive("sessionId", self.session_id)?;
        positive("playerId", self.player_id)?;
        die_value(self.dice_value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Pvp,
    VsAi,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub host_id: PlayerId,
    pub players: Vec<PlayerId>,
    #[serde(default)]
    pub game_prize: i64,
    #[serde(default)]
    pub mode: GameMode,
}

impl ValidatedRequest for CreateGameRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive("hostId", self.host_id)?;
        for player in &self.players {
            positive("players[]", *player)?;
        }
        if !self.players.contains(&self.host_id) {
            return Err(AppError::invalid_input("host must be one of the players"));
        }
        if self.game_prize < 0 {
            return Err(AppError::invalid_input("gamePrize cannot be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndSessionRequest {
    pub session_id: i64,
    pub winner_id: PlayerId,
    #[serde(default)]
    pub expected_version: Option<i32>,
}

impl ValidatedRequest for EndSessionRequest {
    fn validate(&self) -> Result<(), AppError> {
        positive("sessionId", self.session_id)?;
        positive("winnerId", self.winner_id)
    }
}
