//! Session repository: converts store records into validated domain sessions.
//!
//! Every record that crosses this boundary is checked; anything the rules
//! could not have produced surfaces as `DATA_CORRUPTION`.

use std::collections::BTreeSet;

use time::OffsetDateTime;

use crate::domain::game_transition::SessionLifecycleView;
use crate::domain::state::{GameState, PlayerId, MAX_SEATS};
use crate::domain::turns::acting_index;
use crate::entities::sessions::{Model, SessionStatus};
use crate::errors::domain::DomainError;
use crate::infra::store::{SessionCreate, SessionStore, SessionUpdate};

/// Session domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i64,
    pub host_id: PlayerId,
    /// Seat order; index is the turn index.
    pub players: Vec<PlayerId>,
    pub turn: usize,
    pub game_prize: i64,
    pub status: SessionStatus,
    pub min_players: usize,
    pub max_players: usize,
    pub grace_until: Option<OffsetDateTime>,
    pub winner_id: Option<PlayerId>,
    pub game_state: Option<GameState>,
    pub lock_version: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Session {
    /// Player whose turn it is.
    pub fn current_player(&self) -> Option<PlayerId> {
        acting_index(self.turn, &self.players).map(|i| self.players[i])
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.contains(&player_id)
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    pub fn has_minimum(&self) -> bool {
        self.players.len() >= self.min_players
    }

    /// Whether a PENDING session's grace deadline is behind `now`.
    pub fn deadline_passed(&self, now: OffsetDateTime) -> bool {
        self.grace_until.is_some_and(|deadline| deadline <= now)
    }

    /// Whole seconds left before the grace deadline, never negative.
    pub fn seconds_remaining(&self, now: OffsetDateTime) -> i64 {
        match (self.status, self.grace_until) {
            (SessionStatus::Pending, Some(deadline)) => (deadline - now).whole_seconds().max(0),
            _ => 0,
        }
    }

    pub fn lifecycle_view(&self) -> SessionLifecycleView {
        SessionLifecycleView {
            version: self.lock_version,
            status: self.status,
            turn: self.current_player(),
            players: self.players.clone(),
            winner: self.winner_id,
        }
    }
}

impl TryFrom<Model> for Session {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let corrupt =
            |what: String| DomainError::data_corruption(format!("session {}: {what}", model.id));

        if model.players.is_empty() || model.players.len() > MAX_SEATS {
            return Err(corrupt(format!("{} participants", model.players.len())));
        }
        let distinct: BTreeSet<_> = model.players.iter().collect();
        if distinct.len() != model.players.len() {
            return Err(corrupt("duplicate participants".to_string()));
        }
        let turn = usize::try_from(model.turn)
            .ok()
            .filter(|t| *t < model.players.len())
            .ok_or_else(|| corrupt(format!("turn index {} out of range", model.turn)))?;
        let min_players = usize::try_from(model.min_players).unwrap_or(0);
        let max_players = usize::try_from(model.max_players).unwrap_or(0);
        if min_players == 0 || min_players > max_players || max_players > MAX_SEATS {
            return Err(corrupt(format!(
                "player bounds {}..={}",
                model.min_players, model.max_players
            )));
        }
        if model.status == SessionStatus::Pending && model.grace_until.is_none() {
            return Err(corrupt("pending without grace deadline".to_string()));
        }
        if let Some(winner) = model.winner_id {
            if model.status != SessionStatus::Completed || !model.players.contains(&winner) {
                return Err(corrupt(format!("unexpected winner {winner}")));
            }
        }

        let game_state = match model.game_state.as_deref() {
            Some(raw) => {
                let state: GameState = serde_json::from_str(raw)?;
                state.validate(&model.players)?;
                Some(state)
            }
            None => None,
        };
        if game_state.is_none()
            && matches!(model.status, SessionStatus::Active | SessionStatus::Completed)
        {
            return Err(corrupt(format!("{:?} without game state", model.status)));
        }

        Ok(Session {
            id: model.id,
            host_id: model.host_id,
            players: model.players,
            turn,
            game_prize: model.game_prize,
            status: model.status,
            min_players,
            max_players,
            grace_until: model.grace_until,
            winner_id: model.winner_id,
            game_state,
            lock_version: model.lock_version,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Serialize a game state for persistence.
pub fn encode_game_state(state: &GameState) -> Result<String, DomainError> {
    Ok(serde_json::to_string(state)?)
}

pub async fn find_by_id(
    store: &dyn SessionStore,
    session_id: i64,
) -> Result<Option<Session>, DomainError> {
    store
        .find_by_id(session_id)
        .await?
        .map(Session::try_from)
        .transpose()
}

/// Find session by ID or return error if not found.
pub async fn require_session(
    store: &dyn SessionStore,
    session_id: i64,
) -> Result<Session, DomainError> {
    find_by_id(store, session_id)
        .await?
        .ok_or_else(|| DomainError::session_not_found(session_id))
}

pub async fn create_session(
    store: &dyn SessionStore,
    dto: SessionCreate,
) -> Result<Session, DomainError> {
    Session::try_from(store.insert(dto).await?)
}

/// Update session with optimistic locking.
pub async fn update_session(
    store: &dyn SessionStore,
    dto: SessionUpdate,
) -> Result<Session, DomainError> {
    Session::try_from(store.update(dto).await?)
}

/// PENDING sessions, oldest first.
pub async fn find_pending(store: &dyn SessionStore) -> Result<Vec<Session>, DomainError> {
    store
        .find_by_status(SessionStatus::Pending)
        .await?
        .into_iter()
        .map(Session::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;
    use crate::errors::domain::InfraErrorKind;
    use crate::infra::store::MemoryStore;

    fn model() -> Model {
        let now = OffsetDateTime::now_utc();
        Model {
            id: 3,
            host_id: 12,
            players: vec![12, 13],
            turn: 1,
            game_prize: 50,
            status: SessionStatus::Active,
            min_players: 2,
            max_players: 4,
            grace_until: None,
            winner_id: None,
            game_state: Some(
                serde_json::to_string(&GameState::initial(&[12, 13], None)).unwrap(),
            ),
            lock_version: 4,
            created_at: now,
            updated_at: now,
        }
    }

    fn is_corruption(err: DomainError) -> bool {
        matches!(err, DomainError::Infra(InfraErrorKind::DataCorruption, _))
    }

    #[test]
    fn valid_record_converts() {
        let session = Session::try_from(model()).unwrap();
        assert_eq!(session.current_player(), Some(13));
        assert_eq!(session.lifecycle_view().turn, Some(13));
        assert!(session.game_state.is_some());
    }

    #[test]
    fn turn_out_of_range_is_corruption() {
        let mut m = model();
        m.turn = 2;
        assert!(is_corruption(Session::try_from(m).unwrap_err()));
    }

    #[test]
    fn active_without_state_is_corruption() {
        let mut m = model();
        m.game_state = None;
        assert!(is_corruption(Session::try_from(m).unwrap_err()));
    }

    #[test]
    fn garbled_state_is_corruption() {
        let mut m = model();
        m.game_state = Some("{\"tokens\":".to_string());
        assert!(is_corruption(Session::try_from(m).unwrap_err()));
    }

    #[test]
    fn winner_outside_completed_is_corruption() {
        let mut m = model();
        m.winner_id = Some(12);
        assert!(is_corruption(Session::try_from(m).unwrap_err()));
    }

    #[test]
    fn seconds_remaining_clamps_at_zero() {
        let mut m = model();
        let now = OffsetDateTime::now_utc();
        m.status = SessionStatus::Pending;
        m.game_state = None;
        m.grace_until = Some(now + Duration::seconds(30));
        let session = Session::try_from(m).unwrap();
        assert_eq!(session.seconds_remaining(now), 30);
        assert_eq!(session.seconds_remaining(now + Duration::seconds(31)), 0);
        assert!(session.deadline_passed(now + Duration::seconds(30)));
    }

    #[tokio::test]
    async fn require_session_reports_missing() {
        let store = MemoryStore::new();
        let err = require_session(&store, 77).await.unwrap_err();
        assert_eq!(err, DomainError::session_not_found(77));
    }
}
