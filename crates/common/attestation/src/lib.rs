pub mod classifier;
pub mod identifiers;
pub mod runner;

#[cfg(test)]
mod mock;

/// Attestations with an inclusion delay of at least this many slots are considered late.
pub const LATE_ATT_INCLUSION_DELAY: u64 = 1;
