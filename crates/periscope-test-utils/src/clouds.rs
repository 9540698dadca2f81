//! Deterministic point-cloud generators.
//!
//! Every generator is seeded, so a failing case reproduces exactly from the
//! seed printed by the test.

use periscope_core::Point;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` points uniformly inside the primary cell `[0, L)` per axis.
pub fn point_cloud(seed: u64, n: usize, lengths: [f64; 3]) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            [
                rng.random_range(0.0..lengths[0]),
                rng.random_range(0.0..lengths[1]),
                rng.random_range(0.0..lengths[2]),
            ]
        })
        .collect()
}

/// `n` points spanning several box images on every axis, for exercising
/// wrap-on-ingest paths.
pub fn scattered_cloud(seed: u64, n: usize, lengths: [f64; 3]) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            [
                rng.random_range(-2.0 * lengths[0]..3.0 * lengths[0]),
                rng.random_range(-2.0 * lengths[1]..3.0 * lengths[1]),
                rng.random_range(-2.0 * lengths[2]..3.0 * lengths[2]),
            ]
        })
        .collect()
}
