//! Session store contract.
//!
//! The store is a key-value record keyed by session id. Updates are
//! conditional on the caller's `expected_version`, which is what makes every
//! read-modify-write in the services safe against lost updates.

use async_trait::async_trait;

use crate::entities::sessions::{Model, SessionStatus};
use crate::errors::domain::DomainError;

pub mod dto;
pub mod memory;

pub use dto::{SessionCreate, SessionUpdate};
pub use memory::MemoryStore;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new record with `lock_version` 1 and a freshly assigned id.
    async fn insert(&self, dto: SessionCreate) -> Result<Model, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, DomainError>;

    /// Apply `dto` if the stored version still equals `dto.expected_version`.
    ///
    /// Missing record → `NotFound(Session)`; version mismatch →
    /// `Conflict(OptimisticLock)`. On success `lock_version` grows by one.
    async fn update(&self, dto: SessionUpdate) -> Result<Model, DomainError>;

    /// All records in `status`, ordered by id.
    async fn find_by_status(&self, status: SessionStatus) -> Result<Vec<Model>, DomainError>;
}
