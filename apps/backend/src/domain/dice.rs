//! Die roll sources.
//!
//! Production rolls come from a ChaCha-based `StdRng` seeded from the OS
//! entropy source. Seeded and scripted rollers exist for simulations and
//! tests.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::tokens::DIE_FACES;

/// Source of die values in 1..=6.
pub trait DiceRoller: Send + Sync {
    fn roll(&self) -> u8;
}

/// Cryptographically strong roller seeded from OS entropy.
pub struct OsDice {
    rng: Mutex<StdRng>,
}

impl OsDice {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl Default for OsDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRoller for OsDice {
    fn roll(&self) -> u8 {
        self.rng.lock().random_range(DIE_FACES)
    }
}

/// Deterministic roller for reproducible simulations.
pub struct SeededDice {
    rng: Mutex<StdRng>,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl DiceRoller for SeededDice {
    fn roll(&self) -> u8 {
        self.rng.lock().random_range(DIE_FACES)
    }
}

/// Replays a fixed script of values, cycling when exhausted.
///
/// Values outside 1..=6 are dropped; an empty script rolls 1.
pub struct ScriptedDice {
    script: Vec<u8>,
    cursor: Mutex<usize>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: values.into_iter().filter(|v| DIE_FACES.contains(v)).collect(),
            cursor: Mutex::new(0),
        }
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&self) -> u8 {
        if self.script.is_empty() {
            return 1;
        }
        let mut cursor = self.cursor.lock();
        let value = self.script[*cursor % self.script.len()];
        *cursor += 1;
        value
    }
}
