use tracing::{debug, info};

use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::infra::store::SessionUpdate;
use crate::repos::sessions::{self, Session};
use crate::services::game_flow::GameFlowService;
use crate::state::app_state::AppState;
use crate::AppError;

#[derive(Debug)]
pub struct GameFlowMutationResult<T> {
    pub final_session: Session,
    pub old_version: i32,
    pub transitions: Vec<GameTransition>,
    pub outcome: T,
}

impl<T> GameFlowMutationResult<T> {
    pub fn final_version(&self) -> i32 {
        self.final_session.lock_version
    }
}

/// Write `update` against the version `before` was loaded at and report the
/// lifecycle transitions it caused.
///
/// On failure nothing is written and `before` is left as the caller had it.
pub(crate) async fn commit_update(
    state: &AppState,
    before: &Session,
    update: SessionUpdate,
) -> Result<(Session, Vec<GameTransition>), AppError> {
    let after = sessions::update_session(state.store(), update).await?;
    let transitions = derive_game_transitions(Some(&before.lifecycle_view()), &after.lifecycle_view());
    log_transitions(after.id, &transitions);
    Ok((after, transitions))
}

pub(crate) fn log_transitions(session_id: i64, transitions: &[GameTransition]) {
    for transition in transitions {
        match transition {
            GameTransition::TurnBecame { player_id } => {
                debug!(session_id, player_id, "turn passed");
            }
            GameTransition::SessionActivated => info!(session_id, "session activated"),
            GameTransition::SessionExpired => info!(session_id, "session expired"),
            GameTransition::GameEnded { winner } => {
                info!(session_id, winner = ?winner, "game ended");
            }
            GameTransition::PlayerJoined { player_id } => {
                debug!(session_id, player_id, "player joined");
            }
        }
    }
}

impl GameFlowService {
    /// Load → version check → compute → conditional write.
    ///
    /// `mutation` works on the freshly loaded session and returns the update
    /// to apply plus its own outcome. It must not have side effects beyond
    /// reading shared seams (dice, clock): if the write loses a race the
    /// computed result is discarded.
    pub async fn run_mutation<T, F>(
        &self,
        state: &AppState,
        session_id: i64,
        expected_version: Option<i32>,
        mutation: F,
    ) -> Result<GameFlowMutationResult<T>, AppError>
    where
        F: FnOnce(&Session) -> Result<(SessionUpdate, T), AppError>,
    {
        let before = sessions::require_session(state.store(), session_id).await?;
        let old_version = before.lock_version;

        if let Some(expected) = expected_version {
            if expected != old_version {
                return Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Session lock version mismatch: expected {expected}, but session has version {old_version}"
                    ),
                )
                .into());
            }
        }

        let (update, outcome) = mutation(&before)?;
        let (final_session, transitions) = commit_update(state, &before, update).await?;

        Ok(GameFlowMutationResult {
            final_session,
            old_version,
            transitions,
            outcome,
        })
    }
}
