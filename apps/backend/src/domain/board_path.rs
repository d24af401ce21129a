//! Static board paths: one ordered 57-step track per colour.
//!
//! Step 1 is the square a token lands on when it leaves the yard, step 57 is
//! home. The red track is the reference; every other colour walks the same
//! track rotated by a quarter turn about the board centre (8, 8) per seat.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Number of steps from yard exit (1) to home (57), inclusive.
pub const PATH_LEN: usize = 57;

/// Board coordinate on the 15x15 grid (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

const fn c(x: u8, y: u8) -> Coord {
    Coord { x, y }
}

/// Seat colour. Player ordinal 1..=4 maps to Red, Blue, Green, Yellow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Colour for a 1-based player ordinal; `None` outside 1..=4.
    pub fn for_ordinal(ordinal: u8) -> Option<Color> {
        match ordinal {
            1 => Some(Color::Red),
            2 => Some(Color::Blue),
            3 => Some(Color::Green),
            4 => Some(Color::Yellow),
            _ => None,
        }
    }

    fn quarter_turns(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Yellow => 3,
        }
    }
}

#[rustfmt::skip]
const RED_PATH: [Coord; PATH_LEN] = [
    c(7, 2), c(7, 3), c(7, 4), c(7, 5), c(7, 6),
    c(6, 7), c(5, 7), c(4, 7), c(3, 7), c(2, 7),
    c(1, 7), c(1, 8), c(1, 9), c(2, 9), c(3, 9),
    c(4, 9), c(5, 9), c(6, 9), c(7, 10), c(7, 11),
    c(7, 12), c(7, 13), c(7, 14), c(7, 15), c(8, 15),
    c(9, 15), c(9, 14), c(9, 13), c(9, 12), c(9, 11),
    c(9, 10), c(10, 9), c(11, 9), c(12, 9), c(13, 9),
    c(14, 9), c(15, 9), c(15, 8), c(15, 7), c(14, 7),
    c(13, 7), c(12, 7), c(11, 7), c(10, 7), c(9, 6),
    c(9, 5), c(9, 4), c(9, 3), c(9, 2), c(9, 1),
    c(8, 1), c(8, 2), c(8, 3), c(8, 4), c(8, 5),
    c(8, 6), c(8, 7),
];

/// Quarter turn about the centre square: (x, y) -> (16 - y, x).
fn rotate(coord: Coord) -> Coord {
    c(16 - coord.y, coord.x)
}

static PATHS: Lazy<[[Coord; PATH_LEN]; 4]> = Lazy::new(|| {
    let mut paths = [RED_PATH; 4];
    for turns in 1..4 {
        let prev = paths[turns - 1];
        paths[turns] = prev.map(rotate);
    }
    paths
});

/// Full path for a colour, index 0 = step 1.
pub fn path_for(color: Color) -> &'static [Coord; PATH_LEN] {
    &PATHS[color.quarter_turns()]
}

/// Coordinate at `step` (1..=57) on `color`'s path.
///
/// Yard tokens (step 0) and anything past home have no coordinate.
pub fn coordinate_at(color: Color, step: u8) -> Option<Coord> {
    if step == 0 {
        return None;
    }
    path_for(color).get(usize::from(step) - 1).copied()
}
