use crate::core::geometry::HelixFamily;
use crate::core::io::pdb::{PdbError, PdbFile};
use crate::core::io::table::{TableFile, TableOptions};
use crate::core::models::helix::Helix;
use crate::engine::assembler;
use crate::engine::error::BuildError;
use thiserror::Error;

/// Errors raised by the generation workflows.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Pdb(#[from] PdbError),
}

/// Builds the helix for a family and sequence.
///
/// # Arguments
///
/// * `family` - The helix family to model.
/// * `sequence` - One-letter base codes, case-insensitive; may be empty.
///
/// # Errors
///
/// Returns [`BuildError::UnknownBase`] on the first letter outside the
/// family's alphabet.
pub fn build_helix(family: HelixFamily, sequence: &str) -> Result<Helix, BuildError> {
    assembler::assemble(family, sequence)
}

/// Builds the helix and renders it as PDB `ATOM` record lines.
///
/// # Errors
///
/// Fails on an unknown base or on an atom name without a recognized
/// element symbol.
pub fn pdb_records(family: HelixFamily, sequence: &str) -> Result<Vec<String>, GenerateError> {
    let helix = build_helix(family, sequence)?;
    Ok(PdbFile::records(&helix)?)
}

/// Builds the helix and renders it as tabular dump lines.
///
/// # Errors
///
/// Fails on an unknown base; the dump itself is infallible.
pub fn table_dump(
    family: HelixFamily,
    sequence: &str,
    options: &TableOptions,
) -> Result<Vec<String>, GenerateError> {
    let helix = build_helix(family, sequence)?;
    Ok(TableFile::lines(&helix, options))
}
