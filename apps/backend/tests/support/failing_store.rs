//! Store wrapper whose writes can be switched off to exercise persistence failures.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use ludo_backend::entities::sessions::{Model, SessionStatus};
use ludo_backend::errors::domain::{DomainError, InfraErrorKind};
use ludo_backend::infra::store::{MemoryStore, SessionCreate, SessionStore, SessionUpdate};

#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_updates: AtomicBool,
}

impl FailingStore {
    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SessionStore for FailingStore {
    async fn insert(&self, dto: SessionCreate) -> Result<Model, DomainError> {
        self.inner.insert(dto).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn update(&self, dto: SessionUpdate) -> Result<Model, DomainError> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(DomainError::infra(
                InfraErrorKind::Store,
                "store unavailable",
            ));
        }
        self.inner.update(dto).await
    }

    async fn find_by_status(&self, status: SessionStatus) -> Result<Vec<Model>, DomainError> {
        self.inner.find_by_status(status).await
    }
}
