use super::atom::CylindricalAtom;
use super::base::Nucleobase;

/// One placed residue: a nucleobase together with the atoms of its three
/// chemical parts, all in cylindrical coordinates.
///
/// The three atom groups keep the order of their reference geometry tables;
/// the output renderers rely on that order (for example the thymine methyl
/// carbon is the third base atom).
#[derive(Debug, Clone, PartialEq)]
pub struct Nucleotide {
    /// The identity of the residue.
    pub base: Nucleobase,
    /// Atoms of the (deoxy)ribose.
    pub sugar: Vec<CylindricalAtom>,
    /// Atoms of the phosphate group.
    pub phosphate: Vec<CylindricalAtom>,
    /// Atoms of the nucleobase itself.
    pub base_atoms: Vec<CylindricalAtom>,
}

impl Nucleotide {
    /// Total number of atoms across all three parts.
    pub fn atom_count(&self) -> usize {
        self.sugar.len() + self.phosphate.len() + self.base_atoms.len()
    }
}
