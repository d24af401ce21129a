//! Domain layer: pure game rules and the per-game state they operate on.

pub mod board_path;
pub mod capture;
pub mod dice;
pub mod game_transition;
pub mod state;
pub mod tokens;
pub mod turns;
pub mod win;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests_capture;
#[cfg(test)]
mod tests_movement;
#[cfg(test)]
mod tests_props_movement;
#[cfg(test)]
mod tests_win;

// Re-exports for ergonomics
pub use board_path::{coordinate_at, Color, Coord};
pub use capture::{check_capture, CaptureOutcome};
pub use state::{AiMeta, GameState, PlayerId};
pub use tokens::{eligible_token_ids, move_token, Token, TokenId, TokenPosition};
pub use turns::next_turn;
pub use win::check_win;
