use crate::domain::tokens::{Token, TOKENS_PER_PLAYER};

/// A player wins once all four of their tokens are home.
///
/// Anything other than exactly four tokens is not a win.
pub fn check_win(tokens: &[Token]) -> bool {
    tokens.len() == usize::from(TOKENS_PER_PLAYER) && tokens.iter().all(Token::is_home)
}
