use std::fmt;
use std::sync::Arc;

use crate::config::game::GameConfig;
use crate::domain::dice::DiceRoller;
use crate::infra::clock::Clock;
use crate::infra::store::SessionStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Session records
    pub store: Arc<dyn SessionStore>,
    /// Source of "now" for grace deadlines
    pub clock: Arc<dyn Clock>,
    /// Die roll source
    pub dice: Arc<dyn DiceRoller>,
    pub config: GameConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        dice: Arc<dyn DiceRoller>,
        config: GameConfig,
    ) -> Self {
        Self {
            store,
            clock,
            dice,
            config,
        }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
