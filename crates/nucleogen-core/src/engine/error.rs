use crate::core::geometry::HelixFamily;
use thiserror::Error;

/// Errors raised while constructing a helix from a sequence.
///
/// Construction is all-or-nothing: the first bad letter aborts the whole
/// build and no partial helix is ever returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The letter is not a nucleobase of the selected family, or it has no
    /// Watson-Crick complement while a second strand is required.
    #[error("unknown base '{letter}' for helix family {family}")]
    UnknownBase { letter: char, family: HelixFamily },
}
