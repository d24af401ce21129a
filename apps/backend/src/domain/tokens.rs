//! Tokens and the single-token movement rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::domain::board_path::{coordinate_at, Color, Coord};

pub const TOKENS_PER_PLAYER: u8 = 4;
pub const HOME_STEP: u8 = 57;
pub const YARD_EXIT_ROLL: u8 = 6;
pub const DIE_FACES: std::ops::RangeInclusive<u8> = 1..=6;

/// Where a token currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenPosition {
    Yard,
    Path,
    Home,
}

/// Stable token identifier, rendered as `P{ordinal}_T{slot}` (both 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr)]
pub struct TokenId {
    pub ordinal: u8,
    pub slot: u8,
}

impl TokenId {
    pub fn new(ordinal: u8, slot: u8) -> Self {
        Self { ordinal, slot }
    }

    /// Colour of the owning seat; `None` for ordinals outside 1..=4.
    pub fn color(&self) -> Option<Color> {
        Color::for_ordinal(self.ordinal)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}_T{}", self.ordinal, self.slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenIdError(String);

impl fmt::Display for ParseTokenIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid token id '{}'", self.0)
    }
}

impl std::error::Error for ParseTokenIdError {}

impl FromStr for TokenId {
    type Err = ParseTokenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTokenIdError(s.to_string());
        let rest = s.strip_prefix('P').ok_or_else(err)?;
        let (ordinal, slot) = rest.split_once("_T").ok_or_else(err)?;
        let ordinal: u8 = ordinal.parse().map_err(|_| err())?;
        let slot: u8 = slot.parse().map_err(|_| err())?;
        if !(1..=4).contains(&ordinal) || !(1..=TOKENS_PER_PLAYER).contains(&slot) {
            return Err(err());
        }
        Ok(TokenId { ordinal, slot })
    }
}

/// A single token. Value type: rules return new tokens instead of mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub position: TokenPosition,
    pub steps: u8,
}

impl Token {
    pub fn in_yard(id: TokenId) -> Self {
        Self {
            id,
            position: TokenPosition::Yard,
            steps: 0,
        }
    }

    /// Board coordinate derived from the owner's path.
    ///
    /// Yard tokens have none; home tokens resolve to the home square.
    pub fn coordinate(&self) -> Option<Coord> {
        match self.position {
            TokenPosition::Yard => None,
            TokenPosition::Path | TokenPosition::Home => {
                coordinate_at(self.id.color()?, self.steps)
            }
        }
    }

    pub fn is_home(&self) -> bool {
        self.position == TokenPosition::Home && self.steps == HOME_STEP
    }

    /// Position and steps agree: 0 ⟺ YARD, 57 ⟺ HOME, 1..=56 ⟺ PATH.
    pub fn is_consistent(&self) -> bool {
        match self.position {
            TokenPosition::Yard => self.steps == 0,
            TokenPosition::Path => (1..HOME_STEP).contains(&self.steps),
            TokenPosition::Home => self.steps == HOME_STEP,
        }
    }

    pub(crate) fn reset_to_yard(self) -> Self {
        Token::in_yard(self.id)
    }
}

/// The four fresh yard tokens for a seat.
pub fn initial_tokens(ordinal: u8) -> Vec<Token> {
    (1..=TOKENS_PER_PLAYER)
        .map(|slot| Token::in_yard(TokenId::new(ordinal, slot)))
        .collect()
}

/// Apply a die roll to one token.
///
/// Never fails: a roll that cannot be applied (yard without a six,
/// overshooting home, a token already home, a die outside 1..=6) returns the
/// token unchanged.
pub fn move_token(token: &Token, die: u8) -> Token {
    if !DIE_FACES.contains(&die) {
        return *token;
    }
    match token.position {
        TokenPosition::Yard if die == YARD_EXIT_ROLL => Token {
            position: TokenPosition::Path,
            steps: 1,
            ..*token
        },
        TokenPosition::Yard => *token,
        TokenPosition::Path => {
            let new_steps = token.steps.saturating_add(die);
            match new_steps.cmp(&HOME_STEP) {
                // exact-or-nothing: no bounce back
                std::cmp::Ordering::Greater => *token,
                std::cmp::Ordering::Equal => Token {
                    position: TokenPosition::Home,
                    steps: HOME_STEP,
                    ..*token
                },
                std::cmp::Ordering::Less => Token {
                    steps: new_steps,
                    ..*token
                },
            }
        }
        TokenPosition::Home => *token,
    }
}

/// Token ids the acting player may move with `die`.
///
/// PATH tokens are always offered, even when the roll would overshoot home
/// (moving one is then a no-op). YARD tokens only on a six. HOME never.
pub fn eligible_token_ids(tokens: &[Token], die: u8) -> Vec<TokenId> {
    tokens
        .iter()
        .filter(|t| {
            t.position == TokenPosition::Path
                || (die == YARD_EXIT_ROLL && t.position == TokenPosition::Yard)
        })
        .map(|t| t.id)
        .collect()
}
