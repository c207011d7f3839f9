//! # Core Models Module
//!
//! Fundamental data structures for representing a generated helix model.
//!
//! ## Key Components
//!
//! - [`atom`] - A single placed atom in cylindrical coordinates
//! - [`base`] - The closed set of nucleobases and their pairing rules
//! - [`nucleotide`] - One residue's atoms, grouped by chemical part
//! - [`helix`] - The finished one- or two-strand model
//!
//! All models are plain owned data: a [`helix::Helix`] owns its
//! [`nucleotide::Nucleotide`]s, which own their [`atom::CylindricalAtom`]s.
//! Everything is created in a single pass by the engine and never mutated
//! afterwards.

pub mod atom;
pub mod base;
pub mod helix;
pub mod nucleotide;
