//! Drives one complete game through the real services.
//!
//! Players queue through matchmaking, then take turns rolling and moving a
//! random eligible token until someone brings all four tokens home.

use std::collections::BTreeMap;
use std::sync::Arc;

use ludo_backend::domain::dice::SeededDice;
use ludo_backend::domain::state::PlayerId;
use ludo_backend::entities::SessionStatus;
use ludo_backend::protocol::{JoinRequest, MoveRequest, RollRequest, StatusRequest};
use ludo_backend::{build_state, AppError, AppState, GameConfig, GameFlowService, SessionService};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

/// Outcome of one simulated game.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub game: u32,
    pub seed: u64,
    pub session_id: i64,
    pub players: Vec<PlayerId>,
    pub winner: Option<PlayerId>,
    pub rolls: u32,
    pub moves: u32,
    pub turns_passed: u32,
    pub captures: BTreeMap<PlayerId, u32>,
    pub final_version: i32,
}

pub struct Simulator {
    players: usize,
    max_rolls: u32,
}

impl Simulator {
    pub fn new(players: usize, max_rolls: u32) -> Self {
        Self { players, max_rolls }
    }

    fn state_for(&self, seed: u64) -> Result<AppState, AppError> {
        build_state()
            .with_config(GameConfig::default().with_player_bounds(self.players, self.players))
            .with_dice(Arc::new(SeededDice::new(seed)))
            .build()
    }

    pub async fn play(&self, game: u32, seed: u64) -> Result<GameResult, AppError> {
        let state = self.state_for(seed)?;
        let sessions = SessionService;
        let flow = GameFlowService;
        // Token choice uses its own stream so it does not shift the dice.
        let mut picker = StdRng::seed_from_u64(seed.rotate_left(17) ^ 0x5eed);

        let players: Vec<PlayerId> = (1..=self.players as PlayerId).map(|p| 100 + p).collect();
        let mut session_id = 0;
        for player_id in &players {
            let joined = sessions
                .join_or_create(&state, JoinRequest { player_id: *player_id })
                .await?;
            session_id = joined.session_id;
        }

        let status = sessions
            .poll_status(&state, StatusRequest { session_id })
            .await?;
        if status.status != SessionStatus::Active {
            return Err(AppError::internal(format!(
                "session {session_id} did not activate: {:?}",
                status.status
            )));
        }

        let mut result = GameResult {
            game,
            seed,
            session_id,
            players: status.participant_ids.clone(),
            winner: None,
            rolls: 0,
            moves: 0,
            turns_passed: 0,
            captures: BTreeMap::new(),
            final_version: status.version,
        };

        while result.rolls < self.max_rolls {
            let snapshot = sessions.get_session(&state, session_id).await?;
            let Some(player_id) = snapshot.current_player_id else {
                break;
            };

            let roll = flow
                .roll_dice(
                    &state,
                    RollRequest {
                        session_id,
                        player_id,
                        expected_version: Some(snapshot.version),
                    },
                )
                .await?;
            result.rolls += 1;
            result.final_version = roll.version;
            if roll.turn_passed {
                result.turns_passed += 1;
                continue;
            }

            let Some(token_id) = roll.eligible_token_ids.choose(&mut picker).copied() else {
                break;
            };
            let moved = flow
                .move_token(
                    &state,
                    MoveRequest {
                        session_id,
                        player_id,
                        token_id,
                        dice_value: roll.dice_value,
                        expected_version: Some(roll.version),
                    },
                )
                .await?;
            result.moves += 1;
            result.final_version = moved.version;
            debug!(game, player_id, %token_id, dice = roll.dice_value, steps = moved.new_steps, "simulated move");

            if moved.game_over {
                result.winner = moved.winner_id;
                result.captures = moved.game_state.captures.clone();
                break;
            }
            result.captures = moved.game_state.captures;
        }

        Ok(result)
    }
}
