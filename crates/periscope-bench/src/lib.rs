//! Benchmark profiles and utilities for the periscope toolkit.
//!
//! Provides deterministic coordinate clouds sized for benchmarking:
//!
//! - [`frame_cloud`]: pseudo-random points spanning several box images,
//!   reproducing what a trajectory frame hands the engine
//! - [`probe_points`]: query centres mixing interior, face, and vertex
//!   positions so image enumeration cost shows up in the numbers

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use periscope_core::Point;

/// Deterministic pseudo-random cloud of `n` points for one frame.
///
/// Coordinates span roughly `[-L, 2L)` per axis, so ingest wrapping is part
/// of what gets measured. Same `seed`, same cloud.
pub fn frame_cloud(seed: u64, n: usize, lengths: [f64; 3]) -> Vec<Point> {
    (0..n as u64)
        .map(|i| {
            let k = seed.wrapping_mul(0x9e3779b97f4a7c15).wrapping_add(i);
            [
                (3.0 * unit(k, 6364136223846793007) - 1.0) * lengths[0],
                (3.0 * unit(k, 1442695040888963407) - 1.0) * lengths[1],
                (3.0 * unit(k, 2862933555777941757) - 1.0) * lengths[2],
            ]
        })
        .collect()
}

/// Query centres cycling through interior, face, edge, and vertex regions
/// of the cell.
pub fn probe_points(lengths: [f64; 3]) -> Vec<Point> {
    let [lx, ly, lz] = lengths;
    vec![
        [0.5 * lx, 0.5 * ly, 0.5 * lz],
        [0.05 * lx, 0.5 * ly, 0.5 * lz],
        [0.05 * lx, 0.95 * ly, 0.5 * lz],
        [0.05 * lx, 0.05 * ly, 0.05 * lz],
    ]
}

fn unit(i: u64, mult: u64) -> f64 {
    (i.wrapping_mul(mult) >> 11) as f64 / (1u64 << 53) as f64
}
