//! Turn rotation over the ordered participant list.

use crate::domain::state::PlayerId;
use crate::domain::tokens::YARD_EXIT_ROLL;

/// Next acting index after `current` rolled `die`.
///
/// A six keeps the turn; anything else passes it clockwise, wrapping from the
/// last seat to 0. The capture bonus is applied by the caller, not here.
#[inline]
pub fn next_turn(current: usize, die: u8, participants: &[PlayerId]) -> usize {
    if participants.is_empty() || die == YARD_EXIT_ROLL {
        return current;
    }
    (current + 1) % participants.len()
}

/// Index of the player expected to act, normalized onto the participant list.
#[inline]
pub fn acting_index(turn: usize, participants: &[PlayerId]) -> Option<usize> {
    if participants.is_empty() {
        None
    } else {
        Some(turn % participants.len())
    }
}
