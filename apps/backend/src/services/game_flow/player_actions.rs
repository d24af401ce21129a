use tracing::{debug, info};

use super::GameFlowService;
use crate::config::game::AppMode;
use crate::domain::capture::check_capture;
use crate::domain::state::{GameState, PlayerId};
use crate::domain::tokens::{eligible_token_ids, move_token, Token, TokenId};
use crate::domain::turns::next_turn;
use crate::domain::win::check_win;
use crate::entities::sessions::SessionStatus;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::infra::store::SessionUpdate;
use crate::protocol::requests::{MoveRequest, RollRequest, ValidatedRequest};
use crate::protocol::responses::{MoveResponse, RollResponse};
use crate::repos::sessions::{encode_game_state, Session};
use crate::state::app_state::AppState;

/// Reject actions on sessions that are not being played.
pub(crate) fn ensure_active(session: &Session) -> Result<(), DomainError> {
    match session.status {
        SessionStatus::Active => Ok(()),
        SessionStatus::Expired => Err(DomainError::validation(
            ValidationKind::SessionExpired,
            format!("Session {} has expired", session.id),
        )),
        SessionStatus::Pending | SessionStatus::Completed => Err(DomainError::validation(
            ValidationKind::SessionNotActive,
            format!("Session {} is {:?}, not active", session.id, session.status),
        )),
    }
}

fn ensure_turn(session: &Session, player_id: PlayerId) -> Result<(), DomainError> {
    if session.current_player() != Some(player_id) {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            format!(
                "Not your turn. Expected player {:?}, got player {player_id}",
                session.current_player()
            ),
        ));
    }
    Ok(())
}

fn active_state(session: &Session) -> Result<GameState, DomainError> {
    session.game_state.clone().ok_or_else(|| {
        DomainError::data_corruption(format!("session {} has no game state", session.id))
    })
}

fn turn_index(turn: usize) -> Result<i32, DomainError> {
    i32::try_from(turn)
        .map_err(|_| DomainError::data_corruption(format!("turn index {turn} overflows")))
}

#[derive(Debug)]
enum RollOutcome {
    Eligible { dice: u8, tokens: Vec<TokenId> },
    Passed { dice: u8, next_player: PlayerId },
}

#[derive(Debug)]
struct MoveOutcome {
    token: Token,
    captured: usize,
    bonus_turn: bool,
    winner: Option<PlayerId>,
    next_player: Option<PlayerId>,
    game_state: GameState,
}

impl GameFlowService {
    /// Roll the die for the acting player.
    ///
    /// Persists the roll. With no eligible token the turn passes immediately;
    /// otherwise the turn stays put until the player moves.
    pub async fn roll_dice(
        &self,
        state: &AppState,
        request: RollRequest,
    ) -> Result<RollResponse, AppError> {
        request.validate()?;
        let RollRequest {
            session_id,
            player_id,
            expected_version,
        } = request;
        debug!(session_id, player_id, "Rolling dice");

        let result = self
            .run_mutation(state, session_id, expected_version, |session| {
                ensure_active(session)?;
                if state.config.mode == AppMode::Test {
                    if !session.has_player(player_id) {
                        return Err(DomainError::validation(
                            ValidationKind::NotYourTurn,
                            format!("Player {player_id} is not seated in session {session_id}"),
                        )
                        .into());
                    }
                } else {
                    ensure_turn(session, player_id)?;
                }

                let mut game_state = active_state(session)?;
                let dice = state.dice.roll();
                game_state.last_dice = Some(dice);
                let eligible = eligible_token_ids(game_state.tokens_for(player_id), dice);

                let mut update = SessionUpdate::new(session.id, session.lock_version);
                let outcome = if eligible.is_empty() {
                    let next = next_turn(session.turn, dice, &session.players);
                    update = update.with_turn(turn_index(next)?);
                    RollOutcome::Passed {
                        dice,
                        next_player: session.players[next],
                    }
                } else {
                    RollOutcome::Eligible {
                        dice,
                        tokens: eligible,
                    }
                };
                Ok((update.with_game_state(encode_game_state(&game_state)?), outcome))
            })
            .await?;

        let version = result.final_version();
        let response = match result.outcome {
            RollOutcome::Eligible { dice, tokens } => {
                debug!(session_id, player_id, dice, eligible = tokens.len(), "Dice rolled");
                RollResponse {
                    session_id,
                    dice_value: dice,
                    eligible_token_ids: tokens,
                    turn_passed: false,
                    next_player_id: None,
                    version,
                }
            }
            RollOutcome::Passed { dice, next_player } => {
                debug!(session_id, player_id, dice, next_player, "No eligible token, turn passed");
                RollResponse {
                    session_id,
                    dice_value: dice,
                    eligible_token_ids: Vec::new(),
                    turn_passed: true,
                    next_player_id: Some(next_player),
                    version,
                }
            }
        };
        Ok(response)
    }

    /// Move one of the acting player's tokens by the rolled value.
    ///
    /// Applies movement, captures against every opponent, and win detection
    /// as one write. A capture or a six keeps the turn; a win completes the
    /// session without advancing it.
    pub async fn move_token(
        &self,
        state: &AppState,
        request: MoveRequest,
    ) -> Result<MoveResponse, AppError> {
        request.validate()?;
        let MoveRequest {
            session_id,
            player_id,
            token_id,
            dice_value,
            expected_version,
        } = request;
        debug!(session_id, player_id, %token_id, dice = dice_value, "Moving token");

        let result = self
            .run_mutation(state, session_id, expected_version, |session| {
                ensure_active(session)?;
                ensure_turn(session, player_id)?;

                let mut game_state = active_state(session)?;
                let token = *game_state.find_token(player_id, token_id).ok_or_else(|| {
                    DomainError::not_found(
                        NotFoundKind::Token,
                        format!("Token {token_id} not found for player {player_id}"),
                    )
                })?;

                let moved = move_token(&token, dice_value);
                game_state.put_token(player_id, moved);
                game_state.last_dice = Some(dice_value);

                // A blocked move lands nowhere new, so it cannot capture.
                let mut captured = 0;
                if moved != token {
                    for opponent in session.players.iter().filter(|p| **p != player_id) {
                        let outcome = check_capture(&moved, game_state.tokens_for(*opponent));
                        if outcome.any() {
                            captured += outcome.captured;
                            game_state.tokens.insert(*opponent, outcome.tokens);
                        }
                    }
                }
                if captured > 0 {
                    *game_state.captures.entry(player_id).or_insert(0) += captured as u32;
                }

                let update = SessionUpdate::new(session.id, session.lock_version);

                if check_win(game_state.tokens_for(player_id)) {
                    game_state.is_game_over = true;
                    game_state.winner = Some(player_id);
                    let update = update
                        .with_status(SessionStatus::Completed)
                        .with_winner(player_id)
                        .with_game_state(encode_game_state(&game_state)?);
                    return Ok((
                        update,
                        MoveOutcome {
                            token: moved,
                            captured,
                            bonus_turn: false,
                            winner: Some(player_id),
                            next_player: None,
                            game_state,
                        },
                    ));
                }

                *game_state.move_counters.entry(player_id).or_insert(0) += 1;
                let bonus_turn = captured > 0 || dice_value == 6;
                let next = if captured > 0 {
                    session.turn
                } else {
                    next_turn(session.turn, dice_value, &session.players)
                };
                let update = update
                    .with_turn(turn_index(next)?)
                    .with_game_state(encode_game_state(&game_state)?);
                Ok((
                    update,
                    MoveOutcome {
                        token: moved,
                        captured,
                        bonus_turn,
                        winner: None,
                        next_player: Some(session.players[next]),
                        game_state,
                    },
                ))
            })
            .await?;

        let version = result.final_version();
        let outcome = result.outcome;
        if let Some(winner) = outcome.winner {
            info!(session_id, winner, "Player won");
        } else {
            debug!(
                session_id,
                player_id,
                %token_id,
                steps = outcome.token.steps,
                captured = outcome.captured,
                bonus_turn = outcome.bonus_turn,
                "Token moved"
            );
        }

        Ok(MoveResponse {
            session_id,
            token_id,
            new_steps: outcome.token.steps,
            new_position: outcome.token.position,
            coordinate: outcome.token.coordinate(),
            captured: outcome.captured > 0,
            captured_count: outcome.captured,
            bonus_turn: outcome.bonus_turn,
            game_over: outcome.winner.is_some(),
            winner_id: outcome.winner,
            next_player_id: outcome.next_player,
            game_state: outcome.game_state,
            version,
        })
    }
}
