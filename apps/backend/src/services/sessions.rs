//! Session lifecycle: matchmaking, waiting-room polling, direct creation and
//! manual completion.
//!
//! PENDING sessions settle lazily whenever they are looked at: they activate
//! once they hold the minimum number of players and expire once their grace
//! deadline has passed without it.

use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::game_transition::derive_game_transitions;
use crate::domain::state::{AiMeta, GameState, PlayerId};
use crate::entities::sessions::SessionStatus;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::ErrorCode;
use crate::infra::store::{SessionCreate, SessionUpdate};
use crate::protocol::requests::{
    CreateGameRequest, EndSessionRequest, GameMode, JoinRequest, StatusRequest, ValidatedRequest,
};
use crate::protocol::responses::{JoinResponse, SessionSnapshotResponse, StatusResponse};
use crate::repos::sessions::{self, encode_game_state, Session};
use crate::services::game_flow::{commit_update, ensure_active, log_transitions, GameFlowService};
use crate::state::app_state::AppState;

/// Session lifecycle service - stateless; all shared resources come from `AppState`.
#[derive(Default)]
pub struct SessionService;

/// Update that settles a PENDING session at `now`, if one is due.
fn settle_pending(session: &Session, now: OffsetDateTime) -> Result<Option<SessionUpdate>, AppError> {
    if session.status != SessionStatus::Pending {
        return Ok(None);
    }
    if session.has_minimum() {
        return Ok(Some(activation_update(session, session.players.clone())?));
    }
    if session.deadline_passed(now) {
        return Ok(Some(
            SessionUpdate::new(session.id, session.lock_version).with_status(SessionStatus::Expired),
        ));
    }
    Ok(None)
}

/// Seat `players` and start the game. Keeps an existing state that already
/// matches the seating.
fn activation_update(session: &Session, players: Vec<PlayerId>) -> Result<SessionUpdate, AppError> {
    let game_state = match &session.game_state {
        Some(existing) if existing.validate(&players).is_ok() => existing.clone(),
        _ => GameState::initial(&players, None),
    };
    Ok(SessionUpdate::new(session.id, session.lock_version)
        .with_players(players)
        .with_turn(0)
        .with_status(SessionStatus::Active)
        .with_grace_until(None)
        .with_game_state(encode_game_state(&game_state)?))
}

fn ai_username() -> String {
    format!("AI_{:06x}", rand::rng().random_range(0..=0x00ff_ffffu32))
}

impl SessionService {
    /// Queue a player: join the oldest open PENDING session or start a new one.
    pub async fn join_or_create(
        &self,
        state: &AppState,
        request: JoinRequest,
    ) -> Result<JoinResponse, AppError> {
        request.validate()?;
        let player_id = request.player_id;
        let now = state.clock.now();
        debug!(player_id, "Matchmaking request");

        let mut waiting = Vec::new();
        for session in sessions::find_pending(state.store()).await? {
            match settle_pending(&session, now)? {
                Some(update) => match commit_update(state, &session, update).await {
                    Ok(_) => {}
                    // Someone else settled it first.
                    Err(e) if e.code() == ErrorCode::OptimisticLock => {
                        debug!(session_id = session.id, "Pending session settled concurrently");
                    }
                    Err(e) => return Err(e),
                },
                None => waiting.push(session),
            }
        }

        if let Some(queued) = waiting.iter().find(|s| s.has_player(player_id)) {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyQueued,
                format!("Player {player_id} is already waiting in session {}", queued.id),
            )
            .into());
        }

        if let Some(open) = waiting.into_iter().find(|s| !s.is_full()) {
            let mut players = open.players.clone();
            players.push(player_id);
            let update = if players.len() >= open.min_players {
                activation_update(&open, players)?
            } else {
                SessionUpdate::new(open.id, open.lock_version).with_players(players)
            };
            let (joined, _) = commit_update(state, &open, update).await?;
            info!(
                session_id = joined.id,
                player_id,
                participants = joined.players.len(),
                status = ?joined.status,
                "Player joined session"
            );
            return Ok(JoinResponse::from(&joined));
        }

        let dto = SessionCreate::pending(player_id, now + state.config.grace_period)
            .with_player_bounds(
                state.config.min_players as i16,
                state.config.max_players as i16,
            );
        let created = sessions::create_session(state.store(), dto).await?;
        let transitions = derive_game_transitions(None, &created.lifecycle_view());
        log_transitions(created.id, &transitions);
        info!(session_id = created.id, player_id, "Created pending session");
        Ok(JoinResponse::from(&created))
    }

    /// Waiting-room status; settles the session first when it is due.
    pub async fn poll_status(
        &self,
        state: &AppState,
        request: StatusRequest,
    ) -> Result<StatusResponse, AppError> {
        request.validate()?;
        let session = sessions::require_session(state.store(), request.session_id).await?;
        let now = state.clock.now();

        let session = match settle_pending(&session, now)? {
            Some(update) => commit_update(state, &session, update).await?.0,
            None => session,
        };

        Ok(StatusResponse {
            session_id: session.id,
            status: session.status,
            participant_count: session.players.len(),
            min_players: session.min_players,
            max_players: session.max_players,
            seconds_remaining: session.seconds_remaining(now),
            is_active: session.status == SessionStatus::Active,
            version: session.lock_version,
            participant_ids: session.players,
        })
    }

    /// Start an ACTIVE game directly with a known seating.
    pub async fn create_game(
        &self,
        state: &AppState,
        request: CreateGameRequest,
    ) -> Result<SessionSnapshotResponse, AppError> {
        request.validate()?;
        let CreateGameRequest {
            host_id,
            mut players,
            game_prize,
            mode,
        } = request;

        let ai_meta = match mode {
            GameMode::Pvp => None,
            GameMode::VsAi => {
                let ai_id = state.config.ai_player_id;
                if !players.contains(&ai_id) {
                    players.push(ai_id);
                }
                Some(AiMeta {
                    id: ai_id,
                    username: ai_username(),
                    role: "ai".to_string(),
                })
            }
        };

        let mut distinct = players.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() != players.len() {
            return Err(AppError::invalid_input("players must be distinct"));
        }
        if players.len() < 2 || players.len() > state.config.max_players {
            return Err(AppError::invalid_input(format!(
                "a game seats 2..={} players, got {}",
                state.config.max_players,
                players.len()
            )));
        }

        let game_state = GameState::initial(&players, ai_meta);
        let dto = SessionCreate::active(host_id, players, encode_game_state(&game_state)?)
            .with_prize(game_prize)
            .with_player_bounds(
                state.config.min_players as i16,
                state.config.max_players as i16,
            );
        let created = sessions::create_session(state.store(), dto).await?;
        info!(session_id = created.id, host_id, mode = ?mode, "Game created");
        Ok(SessionSnapshotResponse::from(created))
    }

    pub async fn get_session(
        &self,
        state: &AppState,
        session_id: i64,
    ) -> Result<SessionSnapshotResponse, AppError> {
        let session = sessions::require_session(state.store(), session_id).await?;
        Ok(SessionSnapshotResponse::from(session))
    }

    /// Complete an ACTIVE session with an explicit winner.
    pub async fn end_session(
        &self,
        state: &AppState,
        request: EndSessionRequest,
    ) -> Result<SessionSnapshotResponse, AppError> {
        request.validate()?;
        let EndSessionRequest {
            session_id,
            winner_id,
            expected_version,
        } = request;

        let result = GameFlowService
            .run_mutation(state, session_id, expected_version, |session| {
                ensure_active(session)?;
                if !session.has_player(winner_id) {
                    return Err(AppError::invalid_input(format!(
                        "Winner {winner_id} is not part of session {session_id}"
                    )));
                }
                let mut update = SessionUpdate::new(session.id, session.lock_version)
                    .with_status(SessionStatus::Completed)
                    .with_winner(winner_id);
                if let Some(mut game_state) = session.game_state.clone() {
                    game_state.is_game_over = true;
                    game_state.winner = Some(winner_id);
                    update = update.with_game_state(encode_game_state(&game_state)?);
                }
                Ok((update, ()))
            })
            .await?;

        info!(session_id, winner_id, "Session ended");
        Ok(SessionSnapshotResponse::from(result.final_session))
    }
}
