pub mod game;

pub use game::{AppMode, GameConfig};
