//! Per-family reference geometry tables.
//!
//! One module per helix family, each holding the family's helical step
//! constants and the fixed-point atom tables for the phosphate, the sugar
//! and the four supported nucleobases. The values are transcribed from the
//! canonical fiber-diffraction geometries and must never be edited in
//! floating point; the engine unscales them at evaluation time.

pub mod a_dna;
pub mod a_rna;
pub mod b_dna;
