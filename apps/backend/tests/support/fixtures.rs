//! Test environment: in-memory store, manual clock and scripted dice.

use std::sync::Arc;

use ludo_backend::config::game::GameConfig;
use ludo_backend::domain::dice::ScriptedDice;
use ludo_backend::domain::state::{GameState, PlayerId};
use ludo_backend::domain::tokens::{Token, TokenId, TokenPosition};
use ludo_backend::error::AppError;
use ludo_backend::infra::clock::ManualClock;
use ludo_backend::infra::store::{MemoryStore, SessionStore, SessionUpdate};
use ludo_backend::protocol::CreateGameRequest;
use ludo_backend::repos::sessions::{self, Session};
use ludo_backend::{build_state, AppState, SessionService};

pub struct TestEnv {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    pub store: Arc<dyn SessionStore>,
}

impl TestEnv {
    pub async fn session(&self, session_id: i64) -> Session {
        sessions::require_session(self.store.as_ref(), session_id)
            .await
            .expect("session exists")
    }

    /// ACTIVE game seated in the given order.
    pub async fn active_game(&self, players: &[PlayerId]) -> i64 {
        SessionService
            .create_game(
                &self.state,
                CreateGameRequest {
                    host_id: players[0],
                    players: players.to_vec(),
                    game_prize: 0,
                    mode: Default::default(),
                },
            )
            .await
            .expect("create game")
            .session_id
    }

    /// Rewrite the stored game state in place, bypassing the rules.
    pub async fn edit_state(&self, session_id: i64, edit: impl FnOnce(&mut GameState)) -> i32 {
        let session = self.session(session_id).await;
        let mut game_state = session.game_state.clone().expect("game state");
        edit(&mut game_state);
        let json = serde_json::to_string(&game_state).expect("encode state");
        self.store
            .update(SessionUpdate::new(session_id, session.lock_version).with_game_state(json))
            .await
            .expect("state edit")
            .lock_version
    }

    /// Rewrite the stored turn index.
    pub async fn set_turn(&self, session_id: i64, turn: i32) -> i32 {
        let session = self.session(session_id).await;
        self.store
            .update(SessionUpdate::new(session_id, session.lock_version).with_turn(turn))
            .await
            .expect("turn edit")
            .lock_version
    }
}

pub fn place(state: &mut GameState, player: PlayerId, slot: u8, steps: u8) {
    let tokens = state.tokens.get_mut(&player).expect("player tokens");
    let token = &mut tokens[usize::from(slot) - 1];
    *token = Token {
        id: TokenId::new(token.id.ordinal, slot),
        position: match steps {
            0 => TokenPosition::Yard,
            57 => TokenPosition::Home,
            _ => TokenPosition::Path,
        },
        steps,
    };
}

pub fn test_env(dice: impl IntoIterator<Item = u8>) -> TestEnv {
    test_env_with(GameConfig::default(), Arc::new(MemoryStore::new()), dice)
        .expect("default test env")
}

pub fn test_env_with(
    config: GameConfig,
    store: Arc<dyn SessionStore>,
    dice: impl IntoIterator<Item = u8>,
) -> Result<TestEnv, AppError> {
    let clock = Arc::new(ManualClock::default());
    let state = build_state()
        .with_config(config)
        .with_store(store.clone())
        .with_clock(clock.clone())
        .with_dice(Arc::new(ScriptedDice::new(dice)))
        .build()?;
    Ok(TestEnv {
        state,
        clock,
        store,
    })
}
