//! # Workflows Module
//!
//! The public, user-facing API of the library. It ties the [`engine`] and
//! [`core`] layers together into complete procedures: build a helix from a
//! family and a sequence, and render it to one of the output formats.
//!
//! [`engine`]: crate::engine
//! [`core`]: crate::core

pub mod generate;

pub use generate::{GenerateError, build_helix, pdb_records, table_dump};
