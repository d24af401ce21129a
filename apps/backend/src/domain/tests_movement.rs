use crate::domain::board_path::Coord;
use crate::domain::test_helpers::{home, path, yard};
use crate::domain::tokens::{eligible_token_ids, move_token, TokenId, TokenPosition, HOME_STEP};

#[test]
fn six_leaves_the_yard() {
    let moved = move_token(&yard(1, 1), 6);
    assert_eq!(moved.id.to_string(), "P1_T1");
    assert_eq!(moved.position, TokenPosition::Path);
    assert_eq!(moved.steps, 1);
    assert_eq!(moved.coordinate(), Some(Coord { x: 7, y: 2 }));
}

#[test]
fn anything_but_six_stays_in_yard() {
    for die in 1..=5 {
        assert_eq!(move_token(&yard(2, 3), die), yard(2, 3), "die {die}");
    }
}

#[test]
fn exact_roll_reaches_home() {
    let moved = move_token(&path(1, 2, 51), 6);
    assert_eq!(moved.position, TokenPosition::Home);
    assert_eq!(moved.steps, HOME_STEP);
    assert!(moved.is_home());
}

#[test]
fn overshoot_is_blocked_not_clamped() {
    let at_end = path(1, 1, 57);
    assert_eq!(move_token(&at_end, 3), at_end);

    let near = path(1, 1, 55);
    assert_eq!(move_token(&near, 3), near);
    assert_eq!(move_token(&near, 2).position, TokenPosition::Home);
}

#[test]
fn home_tokens_never_move() {
    for die in 1..=6 {
        assert_eq!(move_token(&home(3, 1), die), home(3, 1));
    }
}

#[test]
fn walking_a_whole_track_visits_every_step() {
    let mut token = move_token(&yard(4, 2), 6);
    let mut seen = vec![token.steps];
    while token.position == TokenPosition::Path {
        let die = if token.steps + 5 <= HOME_STEP { 5 } else { HOME_STEP - token.steps };
        token = move_token(&token, die);
        assert!(token.is_consistent());
        assert!(token.coordinate().is_some());
        seen.push(token.steps);
    }
    assert_eq!(token.position, TokenPosition::Home);
    assert_eq!(seen.last(), Some(&HOME_STEP));
}

#[test]
fn overshooting_path_token_is_still_offered() {
    let tokens = vec![path(1, 1, 55), yard(1, 2), home(1, 3), yard(1, 4)];
    assert_eq!(eligible_token_ids(&tokens, 5), vec![TokenId::new(1, 1)]);
}

#[test]
fn nothing_eligible_without_path_tokens_or_six() {
    let tokens = vec![yard(2, 1), yard(2, 2), home(2, 3), home(2, 4)];
    assert!(eligible_token_ids(&tokens, 3).is_empty());
    assert_eq!(
        eligible_token_ids(&tokens, 6),
        vec![TokenId::new(2, 1), TokenId::new(2, 2)]
    );
}
