//! Property tests for the movement, turn and capture rules.

use proptest::prelude::*;

use crate::domain::capture::check_capture;
use crate::domain::test_helpers::{path, yard};
use crate::domain::tokens::{move_token, TokenPosition, HOME_STEP};
use crate::domain::turns::next_turn;

proptest! {
    #![proptest_config(ludo_test_support::proptest_config::proptest_config())]

    #[test]
    fn prop_yard_needs_a_six(ordinal in 1u8..=4, slot in 1u8..=4, die in 1u8..=5) {
        let token = yard(ordinal, slot);
        prop_assert_eq!(move_token(&token, die), token);
        let out = move_token(&token, 6);
        prop_assert_eq!(out.position, TokenPosition::Path);
        prop_assert_eq!(out.steps, 1);
    }

    #[test]
    fn prop_path_moves_add_exactly(steps in 1u8..=56, die in 1u8..=6) {
        let token = path(1, 1, steps);
        let out = move_token(&token, die);
        let target = steps + die;
        if target < HOME_STEP {
            prop_assert_eq!(out, path(1, 1, target));
        } else if target == HOME_STEP {
            prop_assert!(out.is_home());
        } else {
            prop_assert_eq!(out, token);
        }
        prop_assert!(out.is_consistent());
    }

    #[test]
    fn prop_next_turn_rotates(len in 1usize..=4, current_seed in 0usize..4, die in 1u8..=6) {
        let players: Vec<i64> = (1..=len as i64).collect();
        let current = current_seed % len;
        let next = next_turn(current, die, &players);
        if die == 6 {
            prop_assert_eq!(next, current);
        } else {
            prop_assert_eq!(next, (current + 1) % len);
        }
        prop_assert!(next < len);
    }

    #[test]
    fn prop_capture_only_resets_matching_path_tokens(
        mover_steps in 1u8..=56,
        opponent_steps in proptest::collection::vec(0u8..=56, 4),
    ) {
        let mover = path(1, 1, mover_steps);
        let opponents: Vec<_> = opponent_steps
            .iter()
            .enumerate()
            .map(|(i, s)| if *s == 0 { yard(2, i as u8 + 1) } else { path(2, i as u8 + 1, *s) })
            .collect();

        let outcome = check_capture(&mover, &opponents);

        let expected = opponents
            .iter()
            .filter(|t| t.position == TokenPosition::Path && t.coordinate() == mover.coordinate())
            .count();
        prop_assert_eq!(outcome.captured, expected);
        prop_assert_eq!(outcome.tokens.len(), opponents.len());
        for (before, after) in opponents.iter().zip(&outcome.tokens) {
            prop_assert_eq!(before.id, after.id);
            prop_assert!(after.is_consistent());
        }
    }
}
