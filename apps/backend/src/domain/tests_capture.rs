//! Capture evaluation across colours.
//!
//! Track overlaps used below: red step 40 and blue step 1 share (14, 7);
//! red step 27, blue step 40 and green step 1 share (9, 14).

use crate::domain::capture::check_capture;
use crate::domain::test_helpers::{home, path, yard};
use crate::domain::tokens::{move_token, TokenPosition};

#[test]
fn landing_on_an_opponent_sends_it_back_to_the_yard() {
    let mover = move_token(&path(1, 1, 39), 1);
    let blue = vec![path(2, 1, 1), path(2, 2, 9)];

    let outcome = check_capture(&mover, &blue);

    assert!(outcome.any());
    assert_eq!(outcome.captured, 1);
    assert_eq!(outcome.tokens[0], yard(2, 1));
    assert_eq!(outcome.tokens[1], path(2, 2, 9));
}

#[test]
fn every_token_on_the_square_is_captured() {
    let mover = path(1, 1, 40);
    let blue = vec![path(2, 1, 1), path(2, 2, 1), yard(2, 3), path(2, 4, 2)];

    let outcome = check_capture(&mover, &blue);

    assert_eq!(outcome.captured, 2);
    assert_eq!(outcome.tokens[0].position, TokenPosition::Yard);
    assert_eq!(outcome.tokens[1].position, TokenPosition::Yard);
    assert_eq!(outcome.tokens[3], path(2, 4, 2));
}

#[test]
fn three_colours_meet_on_one_square() {
    let mover = path(1, 1, 27);
    let blue = check_capture(&mover, &[path(2, 1, 40)]);
    let green = check_capture(&mover, &[path(3, 1, 1)]);
    assert!(blue.any());
    assert!(green.any());
}

#[test]
fn same_colour_is_never_a_victim() {
    let mover = path(1, 1, 12);
    let own = vec![path(1, 2, 12)];
    let outcome = check_capture(&mover, &own);
    assert!(!outcome.any());
    assert_eq!(outcome.tokens, own);
}

#[test]
fn yard_and_home_opponents_are_safe() {
    let mover = path(2, 1, 1);
    let red = vec![yard(1, 1), home(1, 2)];
    assert!(!check_capture(&mover, &red).any());
}
