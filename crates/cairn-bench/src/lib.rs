//! Benchmark inputs and utilities for cairn containers.
//!
//! Provides deterministic shuffled workloads so bench runs are
//! comparable across machines and commits.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build `n` distinct u64 values shuffled deterministically by `seed`.
pub fn shuffled_values(n: usize, seed: u64) -> Vec<u64> {
    let mut values: Vec<u64> = (0..n as u64).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    values.shuffle(&mut rng);
    values
}
