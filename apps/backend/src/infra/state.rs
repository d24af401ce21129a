use std::sync::Arc;

use crate::config::game::GameConfig;
use crate::domain::dice::{DiceRoller, OsDice};
use crate::error::AppError;
use crate::infra::clock::{Clock, SystemClock};
use crate::infra::store::{MemoryStore, SessionStore};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and the simulator)
pub struct StateBuilder {
    config: GameConfig,
    store: Option<Arc<dyn SessionStore>>,
    clock: Option<Arc<dyn Clock>>,
    dice: Option<Arc<dyn DiceRoller>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            store: None,
            clock: None,
            dice: None,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_dice(mut self, dice: Arc<dyn DiceRoller>) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Validate the config and fill unset seams with production defaults.
    pub fn build(self) -> Result<AppState, AppError> {
        self.config.validate()?;
        Ok(AppState::new(
            self.store.unwrap_or_else(|| Arc::new(MemoryStore::new())),
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.dice.unwrap_or_else(|| Arc::new(OsDice::new())),
            self.config,
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
