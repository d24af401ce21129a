//! In-process `SessionStore` backed by a `DashMap`.
//!
//! Records are kept as serialized JSON so every read and write goes through
//! the same serde round trip a remote key-value store would impose.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use time::OffsetDateTime;
use tracing::debug;

use super::dto::{SessionCreate, SessionUpdate};
use super::SessionStore;
use crate::entities::sessions::{Model, SessionStatus};
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug)]
pub struct MemoryStore {
    rows: DashMap<i64, String>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn insert(&self, dto: SessionCreate) -> Result<Model, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = OffsetDateTime::now_utc();
        let model = Model {
            id,
            host_id: dto.host_id,
            players: dto.players,
            turn: dto.turn,
            game_prize: dto.game_prize,
            status: dto.status,
            min_players: dto.min_players,
            max_players: dto.max_players,
            grace_until: dto.grace_until,
            winner_id: None,
            game_state: dto.game_state,
            lock_version: 1,
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(id, serde_json::to_string(&model)?);
        debug!(session_id = id, status = ?model.status, "session inserted");
        Ok(model)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, DomainError> {
        match self.rows.get(&id) {
            Some(row) => Ok(Some(serde_json::from_str(row.value())?)),
            None => Ok(None),
        }
    }

    async fn update(&self, dto: SessionUpdate) -> Result<Model, DomainError> {
        // Holding the shard guard makes check-and-write atomic per record.
        let mut row = self
            .rows
            .get_mut(&dto.id)
            .ok_or_else(|| DomainError::session_not_found(dto.id))?;
        let mut model: Model = serde_json::from_str(row.value())?;

        if model.lock_version != dto.expected_version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Session lock version mismatch: expected {}, but session has version {}",
                    dto.expected_version, model.lock_version
                ),
            ));
        }

        if let Some(players) = dto.players {
            model.players = players;
        }
        if let Some(turn) = dto.turn {
            model.turn = turn;
        }
        if let Some(status) = dto.status {
            model.status = status;
        }
        if let Some(grace_until) = dto.grace_until {
            model.grace_until = grace_until;
        }
        if let Some(winner_id) = dto.winner_id {
            model.winner_id = winner_id;
        }
        if let Some(game_state) = dto.game_state {
            model.game_state = Some(game_state);
        }
        model.lock_version += 1;
        model.updated_at = OffsetDateTime::now_utc();

        *row = serde_json::to_string(&model)?;
        Ok(model)
    }

    async fn find_by_status(&self, status: SessionStatus) -> Result<Vec<Model>, DomainError> {
        let mut found = Vec::new();
        for row in self.rows.iter() {
            let model: Model = serde_json::from_str(row.value())?;
            if model.status == status {
                found.push(model);
            }
        }
        found.sort_by_key(|m| m.id);
        Ok(found)
    }
}
