//! Capture detection: a moved token sends opponents on its square back to the yard.

use crate::domain::tokens::{Token, TokenPosition};

/// Result of checking one opponent's tokens against a moved token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    /// Opponent tokens after resetting every captured one to the yard.
    pub tokens: Vec<Token>,
    /// How many opponent tokens were captured.
    pub captured: usize,
}

impl CaptureOutcome {
    pub fn any(&self) -> bool {
        self.captured > 0
    }
}

/// Reset every PATH opponent token whose coordinate equals the mover's.
///
/// Every opponent token is checked; a single landing can capture several.
/// A mover without a coordinate (still in the yard) captures nothing.
pub fn check_capture(moving: &Token, opponents: &[Token]) -> CaptureOutcome {
    let Some(target) = moving.coordinate() else {
        return CaptureOutcome {
            tokens: opponents.to_vec(),
            captured: 0,
        };
    };

    let mut captured = 0;
    let tokens = opponents
        .iter()
        .map(|token| {
            if token.position == TokenPosition::Path
                && token.id.ordinal != moving.id.ordinal
                && token.coordinate() == Some(target)
            {
                captured += 1;
                token.reset_to_yard()
            } else {
                *token
            }
        })
        .collect();

    CaptureOutcome { tokens, captured }
}
