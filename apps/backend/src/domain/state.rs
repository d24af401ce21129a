use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::tokens::{initial_tokens, Token, TokenId, TokenPosition, TOKENS_PER_PLAYER};
use crate::errors::domain::DomainError;

/// Participant identifier as issued by the (external) account system.
pub type PlayerId = i64;

/// Maximum number of seats on a board.
pub const MAX_SEATS: usize = 4;

/// Stand-in identity for the AI seat of a vs-AI game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMeta {
    pub id: PlayerId,
    pub username: String,
    pub role: String,
}

/// Per-game token state. Replaced wholesale on every roll/move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GameState {
    /// Tokens per player, keyed by player id.
    pub tokens: BTreeMap<PlayerId, Vec<Token>>,
    /// Opponent tokens captured by each player.
    pub captures: BTreeMap<PlayerId, u32>,
    /// Completed non-winning moves per player.
    pub move_counters: BTreeMap<PlayerId, u32>,
    pub last_dice: Option<u8>,
    pub is_game_over: bool,
    pub winner: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_meta: Option<AiMeta>,
}

impl GameState {
    /// Fresh state: four yard tokens per participant, ordinal = seat + 1.
    pub fn initial(players: &[PlayerId], ai_meta: Option<AiMeta>) -> Self {
        let mut tokens = BTreeMap::new();
        let mut captures = BTreeMap::new();
        let mut move_counters = BTreeMap::new();
        for (seat, player) in players.iter().enumerate() {
            tokens.insert(*player, initial_tokens(seat as u8 + 1));
            captures.insert(*player, 0);
            move_counters.insert(*player, 0);
        }
        Self {
            tokens,
            captures,
            move_counters,
            last_dice: None,
            is_game_over: false,
            winner: None,
            ai_meta,
        }
    }

    pub fn tokens_for(&self, player: PlayerId) -> &[Token] {
        self.tokens.get(&player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find_token(&self, player: PlayerId, id: TokenId) -> Option<&Token> {
        self.tokens_for(player).iter().find(|t| t.id == id)
    }

    /// Replace one token in a player's list, keeping order.
    pub(crate) fn put_token(&mut self, player: PlayerId, token: Token) {
        if let Some(slot) = self
            .tokens
            .get_mut(&player)
            .and_then(|list| list.iter_mut().find(|t| t.id == token.id))
        {
            *slot = token;
        }
    }

    pub fn captures_of(&self, player: PlayerId) -> u32 {
        self.captures.get(&player).copied().unwrap_or(0)
    }

    pub fn moves_of(&self, player: PlayerId) -> u32 {
        self.move_counters.get(&player).copied().unwrap_or(0)
    }

    /// Check the persisted state against the participant list.
    pub fn validate(&self, players: &[PlayerId]) -> Result<(), DomainError> {
        if self.tokens.len() != players.len() {
            return Err(DomainError::data_corruption(format!(
                "game state holds tokens for {} players, session has {}",
                self.tokens.len(),
                players.len()
            )));
        }
        for (seat, player) in players.iter().enumerate() {
            let ordinal = seat as u8 + 1;
            let tokens = self.tokens.get(player).ok_or_else(|| {
                DomainError::data_corruption(format!("no tokens for player {player}"))
            })?;
            if tokens.len() != usize::from(TOKENS_PER_PLAYER) {
                return Err(DomainError::data_corruption(format!(
                    "player {player} has {} tokens",
                    tokens.len()
                )));
            }
            for token in tokens {
                if token.id.ordinal != ordinal {
                    return Err(DomainError::data_corruption(format!(
                        "token {} does not belong to seat {ordinal}",
                        token.id
                    )));
                }
                if !token.is_consistent() {
                    return Err(DomainError::data_corruption(format!(
                        "token {} has position {:?} with {} steps",
                        token.id, token.position, token.steps
                    )));
                }
            }
        }
        if let Some(winner) = self.winner {
            if !players.contains(&winner) {
                return Err(DomainError::data_corruption(format!(
                    "winner {winner} is not a participant"
                )));
            }
        }
        Ok(())
    }

    /// How many tokens of a player sit in each position (yard, path, home).
    pub fn position_counts(&self, player: PlayerId) -> (usize, usize, usize) {
        self.tokens_for(player)
            .iter()
            .fold((0, 0, 0), |(y, p, h), t| match t.position {
                TokenPosition::Yard => (y + 1, p, h),
                TokenPosition::Path => (y, p + 1, h),
                TokenPosition::Home => (y, p, h + 1),
            })
    }
}
