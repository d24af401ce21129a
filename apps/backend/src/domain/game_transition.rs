use crate::domain::state::PlayerId;
use crate::entities::sessions::SessionStatus;

/// The slice of a session that lifecycle transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLifecycleView {
    pub version: i32,
    pub status: SessionStatus,
    /// Player expected to act; only meaningful while ACTIVE.
    pub turn: Option<PlayerId>,
    pub players: Vec<PlayerId>,
    pub winner: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: session moved from Pending -> Active.
    SessionActivated,

    /// Edge-triggered: session moved from Pending -> Expired.
    SessionExpired,

    /// Edge-triggered: session moved from Active -> Completed.
    GameEnded { winner: Option<PlayerId> },

    /// Edge-triggered: a participant was appended.
    PlayerJoined { player_id: PlayerId },
}

/// Derive transitions from before/after lifecycle state.
///
/// `before` is `None` for a session that did not exist yet.
pub fn derive_game_transitions(
    before: Option<&SessionLifecycleView>,
    after: &SessionLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    let before_players: &[PlayerId] = before.map(|b| b.players.as_slice()).unwrap_or(&[]);
    for player_id in &after.players {
        if !before_players.contains(player_id) {
            transitions.push(GameTransition::PlayerJoined {
                player_id: *player_id,
            });
        }
    }

    let before_status = before.map(|b| b.status);
    if before_status != Some(after.status) {
        match after.status {
            SessionStatus::Active => transitions.push(GameTransition::SessionActivated),
            SessionStatus::Expired => transitions.push(GameTransition::SessionExpired),
            SessionStatus::Completed => transitions.push(GameTransition::GameEnded {
                winner: after.winner,
            }),
            SessionStatus::Pending => {}
        }
    }

    // Turn only matters while the game runs.
    if after.status == SessionStatus::Active {
        if let Some(player_id) = after.turn {
            let before_turn = before
                .filter(|b| b.status == SessionStatus::Active)
                .and_then(|b| b.turn);
            if before_turn != Some(player_id) {
                transitions.push(GameTransition::TurnBecame { player_id });
            }
        }
    }

    transitions
}
