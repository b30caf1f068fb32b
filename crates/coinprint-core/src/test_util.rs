//! Shared test helpers for `coinprint-core` unit tests.
//!
//! Deterministic RNGs and ready-made label records, so tests across
//! modules build their fixtures the same way.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::labels::LabelRecord;
use crate::seed::Seed;

/// A reproducible CSPRNG for tests that need fixed seeds.
pub fn seeded_rng(state: u64) -> StdRng {
    StdRng::seed_from_u64(state)
}

/// `count` labels with random seeds and the given face value.
pub fn sample_records(count: usize, amount: u64) -> Vec<LabelRecord> {
    let mut rng = seeded_rng(count as u64);
    LabelRecord::from_pairs((0..count).map(|_| (Seed::random(&mut rng).encode(), amount)))
}
