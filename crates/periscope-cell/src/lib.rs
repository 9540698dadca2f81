//! Orthorhombic periodic cell model.
//!
//! This crate owns everything that depends on the simulation box and nothing
//! that depends on the stored points: validating a 6-component box
//! descriptor, wrapping coordinates into the primary cell, minimum-image
//! displacements and distances, and enumerating the lattice image shifts a
//! radius query must visit near a face, edge, or vertex of the box.
//!
//! The central type is [`PeriodicCell`]; construction fails with
//! [`CellError`] for non-positive edge lengths or non-90° angles.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;

pub use cell::{ImageShift, PeriodicCell};
pub use error::CellError;
