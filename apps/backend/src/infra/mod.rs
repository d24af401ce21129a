//! Infrastructure layer - session store, clock, and state assembly.

pub mod clock;
pub mod state;
pub mod store;
