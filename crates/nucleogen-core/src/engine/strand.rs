use super::error::BuildError;
use crate::core::geometry::{GeometryEntry, HelixFamily};
use crate::core::models::atom::CylindricalAtom;
use crate::core::models::base::Nucleobase;
use crate::core::models::nucleotide::Nucleotide;

/// The sense in which a strand's cumulative angle and height advance.
///
/// The two strands of a double helix are antiparallel: the second strand
/// walks the same cylindrical space with every offset and step negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrandDirection {
    Forward,
    Reverse,
}

impl StrandDirection {
    /// The integer factor applied to every angular and axial offset.
    pub fn factor(self) -> i32 {
        match self {
            StrandDirection::Forward => 1,
            StrandDirection::Reverse => -1,
        }
    }
}

/// Walks a sequence through cylindrical space, one residue at a time.
///
/// The builder keeps two integer accumulators, the cumulative angle in
/// tenths of a degree and the cumulative height in hundredths of an
/// Angstrom, both starting at zero. Every residue's atoms are placed
/// relative to the current accumulator state by evaluating the family's
/// fixed-point tables; the accumulators themselves are never wrapped, only
/// the per-atom angle is normalized into `[0, 3600)` at emission time.
/// Keeping the running state in integers bounds drift to integer
/// arithmetic and makes the helix strictly periodic in angle and linear in
/// height by construction.
#[derive(Debug)]
pub struct StrandBuilder {
    family: HelixFamily,
    direction: StrandDirection,
    theta_deci: i32,
    height_centi: i32,
}

impl StrandBuilder {
    /// Creates a builder at the shared zero anchor.
    pub fn new(family: HelixFamily, direction: StrandDirection) -> Self {
        Self {
            family,
            direction,
            theta_deci: 0,
            height_centi: 0,
        }
    }

    /// Places every residue of the given base run.
    ///
    /// # Arguments
    ///
    /// * `bases` - The bases to place, in traversal order.
    ///
    /// # Return
    ///
    /// Returns one [`Nucleotide`] per base, each holding freshly computed
    /// sugar, phosphate and base atoms.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownBase`] if the family has no geometry
    /// for a base; nothing placed so far is returned.
    pub fn build(mut self, bases: &[Nucleobase]) -> Result<Vec<Nucleotide>, BuildError> {
        let sugar = self.family.sugar();
        let phosphate = self.family.phosphate();

        let mut nucleotides = Vec::with_capacity(bases.len());

        for &base in bases {
            let base_table = self.family.base(base).ok_or(BuildError::UnknownBase {
                letter: base.letter(),
                family: self.family,
            })?;

            nucleotides.push(Nucleotide {
                base,
                sugar: self.place(sugar),
                phosphate: self.place(phosphate),
                base_atoms: self.place(base_table),
            });

            self.advance();
        }

        Ok(nucleotides)
    }

    /// Evaluates one geometry table at the current anchor.
    fn place(&self, entries: &[GeometryEntry]) -> Vec<CylindricalAtom> {
        let d = self.direction.factor();

        entries
            .iter()
            .map(|entry| {
                let angle_deci = (self.theta_deci + entry.angle_deci * d).rem_euclid(3600);
                let height_centi = self.height_centi + entry.height_centi * d;

                CylindricalAtom::new(
                    entry.name,
                    f64::from(entry.radius_centi) / 100.0,
                    f64::from(angle_deci) / 10.0,
                    f64::from(height_centi) / 100.0,
                )
            })
            .collect()
    }

    /// Moves the anchor to the next residue position.
    fn advance(&mut self) {
        let d = self.direction.factor();
        self.theta_deci += self.family.twist_deci_degrees() * d;
        self.height_centi += self.family.rise_centi_angstroms() * d;
    }
}
