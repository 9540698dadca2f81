//! Balanced 3D k-d tree with exact radius queries.
//!
//! [`KdTree`] partitions a fixed point set by cycling the split axis with
//! tree depth and splitting at the median, so lookups stay `O(log n)` deep
//! regardless of input order. Leaves hold small buckets of points; radius
//! queries prune whole subtrees by bounding box and compare squared
//! distances, with an inclusive boundary (`distance ≤ radius`).
//!
//! The tree is immutable once built. Callers with moving points rebuild per
//! frame rather than mutating in place; build cost is one partial sort per
//! level.
//!
//! Periodicity is deliberately absent here: this crate searches plain
//! unwrapped Cartesian space. The periodic search engine layers image
//! replication on top.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod tree;

pub use tree::{KdTree, DEFAULT_BUCKET_SIZE};
