//! Error codes for the Ludo backend.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that a transport layer would put on the wire.

use core::fmt;

/// Centralized error codes for the Ludo backend.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Session & turn rules
    /// No session with the given id
    SessionNotFound,
    /// Session is PENDING or already COMPLETED
    SessionNotActive,
    /// Session expired before reaching its minimum player count
    SessionExpired,
    /// Acting player does not own the current turn
    NotYourTurn,
    /// Token id is not one of the acting player's tokens
    TokenNotFound,
    /// Player already waits in a pending session
    AlreadyQueued,

    // Request Validation
    /// Missing or malformed request fields
    InvalidInput,

    // Concurrency
    /// Stale write rejected by the store
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,
    /// Generic not found (fallback for unmatched kinds)
    NotFound,

    // System Errors
    /// Session store failure
    StoreError,
    /// Persisted record failed validation
    DataCorruption,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::SessionNotActive => "SESSION_NOT_ACTIVE",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::TokenNotFound => "TOKEN_NOT_FOUND",
            Self::AlreadyQueued => "ALREADY_QUEUED",

            Self::InvalidInput => "INVALID_INPUT",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",
            Self::NotFound => "NOT_FOUND",

            Self::StoreError => "STORE_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }

    /// True for the operational codes that sit outside the game-rule taxonomy.
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::StoreError | Self::DataCorruption | Self::ConfigError | Self::Internal
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
