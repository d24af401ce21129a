//! Integration tests for the roll action.

mod common;
mod support;

use std::sync::Arc;

use ludo_backend::config::game::{AppMode, GameConfig};
use ludo_backend::domain::tokens::TokenId;
use ludo_backend::errors::ErrorCode;
use ludo_backend::infra::store::MemoryStore;
use ludo_backend::protocol::{JoinRequest, RollRequest};
use ludo_backend::{GameFlowService, SessionService};
use support::fixtures::place;
use support::{test_env, test_env_with};

fn roll(session_id: i64, player_id: i64) -> RollRequest {
    RollRequest {
        session_id,
        player_id,
        expected_version: None,
    }
}

#[tokio::test]
async fn no_eligible_token_passes_the_turn() {
    let env = test_env([3]);
    let session_id = env.active_game(&[12, 13]).await;

    let rolled = GameFlowService
        .roll_dice(&env.state, roll(session_id, 12))
        .await
        .unwrap();

    assert_eq!(rolled.dice_value, 3);
    assert!(rolled.turn_passed);
    assert!(rolled.eligible_token_ids.is_empty());
    assert_eq!(rolled.next_player_id, Some(13));

    let session = env.session(session_id).await;
    assert_eq!(session.turn, 1);
    assert_eq!(session.game_state.unwrap().last_dice, Some(3));
    assert_eq!(session.lock_version, rolled.version);
}

#[tokio::test]
async fn six_offers_every_yard_token_and_keeps_turn() {
    let env = test_env([6]);
    let session_id = env.active_game(&[12, 13]).await;

    let rolled = GameFlowService
        .roll_dice(&env.state, roll(session_id, 12))
        .await
        .unwrap();

    assert!(!rolled.turn_passed);
    assert_eq!(
        rolled.eligible_token_ids,
        (1..=4).map(|slot| TokenId::new(1, slot)).collect::<Vec<_>>()
    );
    let session = env.session(session_id).await;
    assert_eq!(session.turn, 0);
    assert_eq!(session.game_state.unwrap().last_dice, Some(6));
}

#[tokio::test]
async fn path_tokens_are_offered_on_any_roll() {
    let env = test_env([2]);
    let session_id = env.active_game(&[12, 13]).await;
    env.edit_state(session_id, |state| place(state, 12, 3, 20)).await;

    let rolled = GameFlowService
        .roll_dice(&env.state, roll(session_id, 12))
        .await
        .unwrap();

    assert_eq!(rolled.eligible_token_ids, vec![TokenId::new(1, 3)]);
    assert_eq!(env.session(session_id).await.turn, 0);
}

#[tokio::test]
async fn rolling_out_of_turn_is_rejected() {
    let env = test_env([4]);
    let session_id = env.active_game(&[12, 13]).await;
    let before = env.session(session_id).await;

    let err = GameFlowService
        .roll_dice(&env.state, roll(session_id, 13))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::NotYourTurn);
    assert_eq!(env.session(session_id).await, before);
}

#[tokio::test]
async fn test_mode_lets_any_participant_roll() {
    let config = GameConfig::default().with_mode(AppMode::Test);
    let env = test_env_with(config, Arc::new(MemoryStore::new()), [6]).unwrap();
    let session_id = env.active_game(&[12, 13]).await;

    let rolled = GameFlowService
        .roll_dice(&env.state, roll(session_id, 13))
        .await
        .unwrap();
    assert_eq!(rolled.eligible_token_ids[0], TokenId::new(2, 1));

    let err = GameFlowService
        .roll_dice(&env.state, roll(session_id, 99))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotYourTurn);
}

#[tokio::test]
async fn non_positive_ids_are_rejected_before_lookup() {
    let env = test_env([6]);
    let session_id = env.active_game(&[12, 13]).await;

    let err = GameFlowService
        .roll_dice(&env.state, roll(0, 12))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    let err = GameFlowService
        .roll_dice(&env.state, roll(session_id, -4))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    // Nothing was written.
    assert_eq!(env.session(session_id).await.game_state.unwrap().last_dice, None);
}

#[tokio::test]
async fn rolling_in_pending_or_unknown_session_fails() {
    let env = test_env([6]);
    let pending = SessionService
        .join_or_create(&env.state, JoinRequest { player_id: 12 })
        .await
        .unwrap();

    let err = GameFlowService
        .roll_dice(&env.state, roll(pending.session_id, 12))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionNotActive);

    let err = GameFlowService
        .roll_dice(&env.state, roll(777, 12))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionNotFound);
}

#[tokio::test]
async fn stale_expected_version_is_rejected_before_rolling() {
    let env = test_env([5]);
    let session_id = env.active_game(&[12, 13]).await;
    let version = env.session(session_id).await.lock_version;

    let err = GameFlowService
        .roll_dice(
            &env.state,
            RollRequest {
                session_id,
                player_id: 12,
                expected_version: Some(version - 1),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::OptimisticLock);
    assert_eq!(env.session(session_id).await.lock_version, version);
}

#[tokio::test]
async fn each_roll_bumps_version_once() {
    let env = test_env([1, 2]);
    let session_id = env.active_game(&[12, 13]).await;

    let first = GameFlowService
        .roll_dice(
            &env.state,
            RollRequest {
                session_id,
                player_id: 12,
                expected_version: Some(1),
            },
        )
        .await
        .unwrap();
    assert_eq!(first.version, 2);

    let second = GameFlowService
        .roll_dice(
            &env.state,
            RollRequest {
                session_id,
                player_id: 13,
                expected_version: Some(first.version),
            },
        )
        .await
        .unwrap();
    assert_eq!(second.version, 3);
    assert_eq!(second.next_player_id, Some(12));
}
