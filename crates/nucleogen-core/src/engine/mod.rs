//! # Engine Module
//!
//! The construction logic that turns a base sequence into a placed helix.
//!
//! ## Overview
//!
//! The engine walks a sequence through cylindrical space: [`strand`] keeps
//! the per-strand integer accumulators and evaluates the family's
//! fixed-point geometry tables at each residue anchor, while [`assembler`]
//! parses the sequence, derives the antiparallel complementary strand for
//! double-stranded families and composes the final
//! [`Helix`](crate::core::models::helix::Helix).
//!
//! Construction is a single synchronous pass with no I/O and no shared
//! state; the first invalid letter aborts the whole build ([`error`]).

pub mod assembler;
pub mod error;
pub mod strand;
