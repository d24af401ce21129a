use crate::domain::test_helpers::{home, path};
use crate::domain::win::check_win;

#[test]
fn four_home_tokens_win() {
    let tokens = vec![home(1, 1), home(1, 2), home(1, 3), home(1, 4)];
    assert!(check_win(&tokens));
}

#[test]
fn three_home_and_one_on_path_is_no_win() {
    let tokens = vec![home(1, 1), home(1, 2), home(1, 3), path(1, 4, 10)];
    assert!(!check_win(&tokens));
}

#[test]
fn short_token_list_is_no_win() {
    assert!(!check_win(&[home(2, 1), home(2, 2), home(2, 3)]));
    assert!(!check_win(&[]));
}
