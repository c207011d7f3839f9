use super::error::BuildError;
use super::strand::{StrandBuilder, StrandDirection};
use crate::core::geometry::HelixFamily;
use crate::core::models::base::Nucleobase;
use crate::core::models::helix::Helix;

/// Parses a raw sequence into the bases of the given family.
///
/// Letters are folded to uppercase; a letter that is no nucleobase at all,
/// or one the family has no geometry for, aborts with
/// [`BuildError::UnknownBase`]. An empty sequence is valid and yields an
/// empty run.
pub fn parse_sequence(
    family: HelixFamily,
    sequence: &str,
) -> Result<Vec<Nucleobase>, BuildError> {
    sequence
        .chars()
        .map(|letter| {
            Nucleobase::from_letter(letter)
                .filter(|&base| family.base(base).is_some())
                .ok_or(BuildError::UnknownBase {
                    letter: letter.to_ascii_uppercase(),
                    family,
                })
        })
        .collect()
}

/// Complements every base in place order (A<->T, G<->C).
///
/// Uracil has no Watson-Crick partner here and fails; it can only reach
/// this point through the single-stranded family, which never complements.
fn complement_sequence(
    family: HelixFamily,
    bases: &[Nucleobase],
) -> Result<Vec<Nucleobase>, BuildError> {
    bases
        .iter()
        .map(|&base| {
            base.complement().ok_or(BuildError::UnknownBase {
                letter: base.letter(),
                family,
            })
        })
        .collect()
}

/// Builds a complete helix for the given family and sequence.
///
/// Strand one walks the parsed sequence forward from the zero anchor. For
/// double-stranded families, strand two walks the complemented sequence in
/// the same per-letter order but in the reverse direction from the same
/// anchor, so the two strands are antiparallel and related by symmetry
/// rather than by reversing array order.
///
/// # Errors
///
/// Returns [`BuildError::UnknownBase`] on the first letter outside the
/// family's alphabet; no partial helix is returned.
pub fn assemble(family: HelixFamily, sequence: &str) -> Result<Helix, BuildError> {
    let bases = parse_sequence(family, sequence)?;

    let strand1 = StrandBuilder::new(family, StrandDirection::Forward).build(&bases)?;

    let strand2 = if family.is_double_stranded() {
        let complemented = complement_sequence(family, &bases)?;
        Some(StrandBuilder::new(family, StrandDirection::Reverse).build(&complemented)?)
    } else {
        None
    };

    Ok(Helix { strand1, strand2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_yields_empty_strands_for_every_family() {
        for family in HelixFamily::ALL {
            let helix = assemble(family, "").unwrap();
            assert!(helix.strand1.is_empty());
            match family {
                HelixFamily::ARna => assert_eq!(helix.strand2, None),
                _ => assert_eq!(helix.strand2, Some(Vec::new())),
            }
        }
    }

    #[test]
    fn parsing_folds_case_and_validates_the_alphabet() {
        let bases = parse_sequence(HelixFamily::BDna, "aTgC").unwrap();
        assert_eq!(
            bases,
            [
                Nucleobase::Adenine,
                Nucleobase::Thymine,
                Nucleobase::Guanine,
                Nucleobase::Cytosine,
            ]
        );
    }

    #[test]
    fn unknown_letters_report_the_folded_letter() {
        let result = parse_sequence(HelixFamily::ADna, "ACxG");
        assert_eq!(
            result,
            Err(BuildError::UnknownBase {
                letter: 'X',
                family: HelixFamily::ADna,
            })
        );
    }

    #[test]
    fn uracil_is_rejected_by_the_dna_families() {
        for family in [HelixFamily::ADna, HelixFamily::BDna] {
            let result = assemble(family, "AU");
            assert_eq!(
                result,
                Err(BuildError::UnknownBase { letter: 'U', family })
            );
        }
    }

    #[test]
    fn thymine_is_rejected_by_the_rna_family() {
        let result = assemble(HelixFamily::ARna, "AT");
        assert_eq!(
            result,
            Err(BuildError::UnknownBase {
                letter: 'T',
                family: HelixFamily::ARna,
            })
        );
    }

    #[test]
    fn second_strand_is_the_in_order_complement() {
        let helix = assemble(HelixFamily::BDna, "TCCCCGGGGA").unwrap();

        let strand1: String = helix.strand1.iter().map(|n| n.base.letter()).collect();
        assert_eq!(strand1, "TCCCCGGGGA");

        let strand2: String = helix
            .strand2
            .as_ref()
            .unwrap()
            .iter()
            .map(|n| n.base.letter())
            .collect();
        assert_eq!(strand2, "AGGGGCCCCT");
    }

    #[test]
    fn rna_helix_has_no_second_strand() {
        let helix = assemble(HelixFamily::ARna, "AUGC").unwrap();
        assert_eq!(helix.strand1.len(), 4);
        assert!(helix.strand2.is_none());
    }

    #[test]
    fn both_strands_start_from_the_shared_zero_anchor() {
        let helix = assemble(HelixFamily::BDna, "AG").unwrap();
        let strand2 = helix.strand2.as_ref().unwrap();

        // Residue 0 of both strands is anchored at (0, 0); only the sign of
        // the per-atom offsets differs.
        let up = &helix.strand1[0].sugar[0];
        let down = &strand2[0].sugar[0];
        assert_eq!(up.radius, down.radius);
        assert_eq!(up.height, -down.height);
        assert!((up.theta + down.theta - 360.0).abs() < 1e-12);
    }
}
