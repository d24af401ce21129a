//! Domain-level error type used across services and the session store.
//!
//! This error type is transport- and storage-agnostic. Callers at the edge
//! should work with `Result<T, crate::error::AppError>` and convert from
//! `DomainError` using the provided `From<DomainError> for AppError`
//! implementation.
//!
//! The movement, capture, win and turn rules never produce a `DomainError`:
//! illegal moves there are silent no-ops.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// The session store could not complete the operation.
    Store,
    /// A persisted record failed validation when loaded.
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Token,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Player already waits in a pending matchmaking session.
    AlreadyQueued,
    /// Stored lock_version no longer matches the one the caller loaded.
    OptimisticLock,
    Other(String),
}

/// Business rule and input validation kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Session exists but is PENDING or COMPLETED.
    SessionNotActive,
    /// Session grace deadline passed and it was expired.
    SessionExpired,
    /// Acting player does not own the current turn.
    NotYourTurn,
    /// Missing or malformed request fields.
    InvalidInput,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InvalidInput, detail)
    }

    pub fn session_not_found(session_id: i64) -> Self {
        Self::not_found(
            NotFoundKind::Session,
            format!("Session {session_id} not found"),
        )
    }

    pub fn data_corruption(detail: impl Into<String>) -> Self {
        Self::infra(InfraErrorKind::DataCorruption, detail)
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::data_corruption(format!("session record (de)serialization failed: {e}"))
    }
}
