//! # Nucleogen Core Library
//!
//! A library for generating idealized 3-D atomic models of canonical
//! nucleic-acid helices (A-DNA, B-DNA, A-RNA) from a one-letter base
//! sequence.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to keep
//! the pure data, the construction logic and the public API separate.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Helix`,
//!   `Nucleotide`, `CylindricalAtom`), the immutable per-family reference
//!   geometry tables, and the output renderers (PDB records, tabular dump).
//!
//! - **[`engine`]: The Logic Core.** The stateful construction pass: the
//!   `StrandBuilder` that advances integer angle/height accumulators along
//!   the helix axis, and the assembler that derives the antiparallel
//!   complementary strand.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing
//!   layer tying `engine` and `core` together: build a helix and render it
//!   in one call.
//!
//! ## Example
//!
//! ```
//! use nucleogen::core::geometry::HelixFamily;
//! use nucleogen::workflows::build_helix;
//!
//! let helix = build_helix(HelixFamily::BDna, "TCCCCGGGGA").unwrap();
//! assert_eq!(helix.strand1.len(), 10);
//! assert!(helix.is_double_stranded());
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
