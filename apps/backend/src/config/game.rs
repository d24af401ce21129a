//! Game rules configuration.
//!
//! Built once at startup (or by tests) and handed to `AppState`; nothing in
//! the crate reads the environment after that.

use std::env;
use std::str::FromStr;

use time::Duration;

use crate::domain::state::{PlayerId, MAX_SEATS};
use crate::error::AppError;

/// Runtime mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal rules.
    Prod,
    /// Relaxes the turn-ownership check on roll, for driving games by hand.
    Test,
}

impl FromStr for AppMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(AppMode::Prod),
            "test" => Ok(AppMode::Test),
            other => Err(AppError::config(format!(
                "LUDO_APP_MODE must be 'prod' or 'test', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub min_players: usize,
    pub max_players: usize,
    /// How long a PENDING session waits for its minimum before expiring.
    pub grace_period: Duration,
    pub mode: AppMode,
    /// Stand-in identity seated in vs-AI games.
    pub ai_player_id: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: MAX_SEATS,
            grace_period: Duration::seconds(90),
            mode: AppMode::Prod,
            ai_player_id: 9999,
        }
    }
}

impl GameConfig {
    /// Load from `LUDO_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            min_players: parse_var("LUDO_MIN_PLAYERS")?.unwrap_or(defaults.min_players),
            max_players: parse_var("LUDO_MAX_PLAYERS")?.unwrap_or(defaults.max_players),
            grace_period: parse_var::<i64>("LUDO_GRACE_SECONDS")?
                .map(Duration::seconds)
                .unwrap_or(defaults.grace_period),
            mode: match env::var("LUDO_APP_MODE") {
                Ok(raw) => raw.parse()?,
                Err(env::VarError::NotPresent) => defaults.mode,
                Err(e) => return Err(e.into()),
            },
            ai_player_id: parse_var("LUDO_AI_PLAYER_ID")?.unwrap_or(defaults.ai_player_id),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.min_players < 2 || self.min_players > self.max_players {
            return Err(AppError::config(format!(
                "min_players must be within 2..={}, got {}",
                self.max_players, self.min_players
            )));
        }
        if self.max_players > MAX_SEATS {
            return Err(AppError::config(format!(
                "max_players cannot exceed {MAX_SEATS}, got {}",
                self.max_players
            )));
        }
        if !self.grace_period.is_positive() {
            return Err(AppError::config("grace period must be positive"));
        }
        if self.ai_player_id <= 0 {
            return Err(AppError::config("ai_player_id must be positive"));
        }
        Ok(())
    }

    pub fn with_mode(mut self, mode: AppMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    pub fn with_player_bounds(mut self, min_players: usize, max_players: usize) -> Self {
        self.min_players = min_players;
        self.max_players = max_players;
        self
    }
}

/// Unset → `None`; set but unparsable → config error.
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
