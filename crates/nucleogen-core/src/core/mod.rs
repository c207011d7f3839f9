//! # Core Module
//!
//! The stateless foundation of the library: data models, reference
//! geometry and output rendering for idealized nucleic-acid helices.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms in cylindrical
//!   coordinates, nucleobases, nucleotides and the finished helix
//! - **Reference Geometry** ([`geometry`]) - The three helix families and
//!   their fixed-point per-residue atom tables
//! - **File I/O** ([`io`]) - PDB atom records and the tabular coordinate
//!   dump
//!
//! Everything in this layer is immutable data or a pure function over it;
//! the stateful sequence walk lives in [`crate::engine`].

pub mod geometry;
pub mod io;
pub mod models;
