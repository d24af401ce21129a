//! Token builders shared by the domain test modules.

use crate::domain::tokens::{Token, TokenId, TokenPosition, HOME_STEP};

pub fn yard(ordinal: u8, slot: u8) -> Token {
    Token::in_yard(TokenId::new(ordinal, slot))
}

pub fn path(ordinal: u8, slot: u8, steps: u8) -> Token {
    Token {
        id: TokenId::new(ordinal, slot),
        position: TokenPosition::Path,
        steps,
    }
}

pub fn home(ordinal: u8, slot: u8) -> Token {
    Token {
        id: TokenId::new(ordinal, slot),
        position: TokenPosition::Home,
        steps: HOME_STEP,
    }
}
