//! Repository layer - store records in, validated domain sessions out.

pub mod sessions;
