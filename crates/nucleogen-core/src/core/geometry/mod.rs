//! # Geometry Module
//!
//! Canonical per-family reference geometries for idealized nucleic-acid
//! helices.
//!
//! Each of the three supported helix families carries a fixed set of
//! per-part atom tables ([`tables`]) plus two helical constants: the angle
//! the helix turns with each nucleotide and the distance it rises. All
//! values are stored pre-scaled as integers (hundredths of an Angstrom for
//! radius/height, tenths of a degree for angles) so the tables stay exactly
//! reproducible and diffable; they are unscaled to floating point only when
//! the engine evaluates them.

pub mod tables;

use super::models::base::Nucleobase;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named atom with its reference cylindrical offset in fixed-point units.
///
/// Offsets are relative to the owning residue's anchor on the helix axis:
/// `radius_centi` and `height_centi` are hundredths of an Angstrom,
/// `angle_deci` is tenths of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryEntry {
    pub name: &'static str,
    pub radius_centi: i32,
    pub angle_deci: i32,
    pub height_centi: i32,
}

impl GeometryEntry {
    /// Creates a table entry; `const` so the static tables can use it.
    pub const fn new(
        name: &'static str,
        radius_centi: i32,
        angle_deci: i32,
        height_centi: i32,
    ) -> Self {
        Self {
            name,
            radius_centi,
            angle_deci,
            height_centi,
        }
    }
}

/// The closed set of modeled helix families.
///
/// Each family is a strategy over the constant tables in [`tables`]: it
/// supplies the two helical step constants, the shared phosphate and sugar
/// parts, and a per-base lookup covering exactly the letters the family
/// supports (A/T/G/C for the DNA families, A/U/G/C for A-RNA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelixFamily {
    ADna,
    BDna,
    ARna,
}

impl HelixFamily {
    /// All supported families, in display order.
    pub const ALL: [HelixFamily; 3] = [HelixFamily::ADna, HelixFamily::BDna, HelixFamily::ARna];

    /// The angle the helix turns with each nucleotide, in tenths of a
    /// degree.
    pub fn twist_deci_degrees(self) -> i32 {
        match self {
            HelixFamily::ADna => tables::a_dna::TWIST_DECI_DEGREES,
            HelixFamily::BDna => tables::b_dna::TWIST_DECI_DEGREES,
            HelixFamily::ARna => tables::a_rna::TWIST_DECI_DEGREES,
        }
    }

    /// The distance the helix rises with each nucleotide, in hundredths of
    /// an Angstrom.
    pub fn rise_centi_angstroms(self) -> i32 {
        match self {
            HelixFamily::ADna => tables::a_dna::RISE_CENTI_ANGSTROMS,
            HelixFamily::BDna => tables::b_dna::RISE_CENTI_ANGSTROMS,
            HelixFamily::ARna => tables::a_rna::RISE_CENTI_ANGSTROMS,
        }
    }

    /// The reference geometry of the phosphate group.
    pub fn phosphate(self) -> &'static [GeometryEntry] {
        match self {
            HelixFamily::ADna => &tables::a_dna::PHOSPHATE,
            HelixFamily::BDna => &tables::b_dna::PHOSPHATE,
            HelixFamily::ARna => &tables::a_rna::PHOSPHATE,
        }
    }

    /// The reference geometry of the ribose or deoxyribose.
    pub fn sugar(self) -> &'static [GeometryEntry] {
        match self {
            HelixFamily::ADna => &tables::a_dna::SUGAR,
            HelixFamily::BDna => &tables::b_dna::SUGAR,
            HelixFamily::ARna => &tables::a_rna::SUGAR,
        }
    }

    /// The reference geometry of the given nucleobase.
    ///
    /// # Return
    ///
    /// Returns `None` when the family does not support the base (thymine
    /// in A-RNA, uracil in the DNA families); callers turn that into an
    /// unknown-base error.
    pub fn base(self, base: Nucleobase) -> Option<&'static [GeometryEntry]> {
        match self {
            HelixFamily::ADna => match base {
                Nucleobase::Adenine => Some(&tables::a_dna::ADENINE[..]),
                Nucleobase::Thymine => Some(&tables::a_dna::THYMINE[..]),
                Nucleobase::Guanine => Some(&tables::a_dna::GUANINE[..]),
                Nucleobase::Cytosine => Some(&tables::a_dna::CYTOSINE[..]),
                Nucleobase::Uracil => None,
            },
            HelixFamily::BDna => match base {
                Nucleobase::Adenine => Some(&tables::b_dna::ADENINE[..]),
                Nucleobase::Thymine => Some(&tables::b_dna::THYMINE[..]),
                Nucleobase::Guanine => Some(&tables::b_dna::GUANINE[..]),
                Nucleobase::Cytosine => Some(&tables::b_dna::CYTOSINE[..]),
                Nucleobase::Uracil => None,
            },
            HelixFamily::ARna => match base {
                Nucleobase::Adenine => Some(&tables::a_rna::ADENINE[..]),
                Nucleobase::Uracil => Some(&tables::a_rna::URACIL[..]),
                Nucleobase::Guanine => Some(&tables::a_rna::GUANINE[..]),
                Nucleobase::Cytosine => Some(&tables::a_rna::CYTOSINE[..]),
                Nucleobase::Thymine => None,
            },
        }
    }

    /// Whether the family builds a second, complementary strand.
    pub fn is_double_stranded(self) -> bool {
        !matches!(self, HelixFamily::ARna)
    }
}

#[derive(Debug, Error)]
#[error("invalid helix family '{0}', expected one of A-DNA, B-DNA, A-RNA")]
pub struct ParseHelixFamilyError(pub String);

impl FromStr for HelixFamily {
    type Err = ParseHelixFamilyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a-dna" | "adna" | "a_dna" => Ok(HelixFamily::ADna),
            "b-dna" | "bdna" | "b_dna" => Ok(HelixFamily::BDna),
            "a-rna" | "arna" | "a_rna" => Ok(HelixFamily::ARna),
            _ => Err(ParseHelixFamilyError(s.to_string())),
        }
    }
}

impl fmt::Display for HelixFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                HelixFamily::ADna => "A-DNA",
                HelixFamily::BDna => "B-DNA",
                HelixFamily::ARna => "A-RNA",
            }
        )
    }
}
