use super::format_decimal;
use super::traits::HelixFile;
use crate::core::models::atom::CylindricalAtom;
use crate::core::models::base::Nucleobase;
use crate::core::models::helix::Helix;
use crate::core::models::nucleotide::Nucleotide;
use phf::{Map, phf_map};
use std::io::{self, Write};
use thiserror::Error;

// The geometry tables use the bare script names; the PDB convention for
// nucleic acids primes the sugar atoms and numbers the phosphate oxygens.
#[rustfmt::skip]
static SUGAR_NAMES: Map<&'static str, &'static str> = phf_map! {
    "C1" => "C1'",
    "C2" => "C2'",
    "C3" => "C3'",
    "C4" => "C4'",
    "C5" => "C5'",
    "O2" => "O2'",
    "O4" => "O4'",
};

#[rustfmt::skip]
static PHOSPHATE_NAMES: Map<&'static str, &'static str> = phf_map! {
    "O1" => "O5'",
    "O2" => "OP1",
    "O3" => "OP2",
    "P1" => "P",
    "O4" => "O3'",
};

/// The PDB name of the thymine methyl carbon, table name "Me".
const THYMINE_METHYL: &str = "C7";

/// Index of the methyl carbon in the thymine base tables.
const THYMINE_METHYL_INDEX: usize = 2;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("atom name '{name}' does not start with a known element symbol (C, H, N, O or P)")]
    UnrecognizedElement { name: String },
}

/// Renders a helix as fixed-column PDB `ATOM` records.
///
/// Per nucleotide the emission order is sugar, base, phosphate. Atom
/// serial numbers start at 1 and increase by one across both strands;
/// residue numbers restart at 1 per strand; strand one is chain `A`,
/// strand two chain `B`. Coordinates are Cartesian with three decimals,
/// ties rounded away from zero, and the column layout is byte-for-byte
/// what structure viewers such as PyMOL parse.
pub struct PdbFile;

impl PdbFile {
    /// Renders every atom of the helix as one `ATOM` record line.
    ///
    /// # Errors
    ///
    /// Returns [`PdbError::UnrecognizedElement`] if a renamed atom name
    /// does not start with C, H, N, O or P; no further records are
    /// produced.
    pub fn records(helix: &Helix) -> Result<Vec<String>, PdbError> {
        let mut lines = Vec::with_capacity(helix.atom_count());
        let mut serial = 1usize;

        for (strand, chain_id) in helix.strands().zip(['A', 'B']) {
            for (index, nucleotide) in strand.iter().enumerate() {
                push_nucleotide(&mut lines, &mut serial, nucleotide, chain_id, index + 1)?;
            }
        }

        Ok(lines)
    }
}

fn push_nucleotide(
    lines: &mut Vec<String>,
    serial: &mut usize,
    nucleotide: &Nucleotide,
    chain_id: char,
    residue_number: usize,
) -> Result<(), PdbError> {
    let residue_code = format!(
        "D{} {}{:>4}",
        nucleotide.base.letter(),
        chain_id,
        residue_number
    );

    for atom in &nucleotide.sugar {
        let name = SUGAR_NAMES.get(atom.name).copied().unwrap_or(atom.name);
        lines.push(format_record(*serial, name, &residue_code, atom)?);
        *serial += 1;
    }

    let thymine = nucleotide.base == Nucleobase::Thymine;
    for (index, atom) in nucleotide.base_atoms.iter().enumerate() {
        let name = if thymine && index == THYMINE_METHYL_INDEX {
            THYMINE_METHYL
        } else {
            atom.name
        };
        lines.push(format_record(*serial, name, &residue_code, atom)?);
        *serial += 1;
    }

    for atom in &nucleotide.phosphate {
        let name = PHOSPHATE_NAMES.get(atom.name).copied().unwrap_or(atom.name);
        lines.push(format_record(*serial, name, &residue_code, atom)?);
        *serial += 1;
    }

    Ok(())
}

fn format_record(
    serial: usize,
    name: &str,
    residue_code: &str,
    atom: &CylindricalAtom,
) -> Result<String, PdbError> {
    let element = element_symbol(name)?;
    let point = atom.cartesian();

    Ok(format!(
        "ATOM{serial:>7}  {name:<5}{residue_code}{x:>12}{y:>8}{z:>8}  1.00  0.00           {element}",
        x = format_decimal(point.x, 3),
        y = format_decimal(point.y, 3),
        z = format_decimal(point.z, 3),
    ))
}

/// Derives the element symbol from the first character of the atom name.
fn element_symbol(name: &str) -> Result<char, PdbError> {
    match name.chars().next() {
        Some(symbol @ ('C' | 'H' | 'N' | 'O' | 'P')) => Ok(symbol),
        _ => Err(PdbError::UnrecognizedElement {
            name: name.to_string(),
        }),
    }
}

impl HelixFile for PdbFile {
    type Options = ();
    type Error = PdbError;

    fn write_to(
        helix: &Helix,
        _options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        for line in Self::records(helix)? {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::HelixFamily;
    use crate::core::geometry::tables::b_dna;
    use crate::engine::assembler::assemble;

    fn b_dna_records(sequence: &str) -> Vec<String> {
        let helix = assemble(HelixFamily::BDna, sequence).unwrap();
        PdbFile::records(&helix).unwrap()
    }

    #[test]
    fn every_record_is_78_bytes_with_fixed_columns() {
        for line in b_dna_records("ATGC") {
            assert_eq!(line.len(), 78, "bad length: '{line}'");
            assert_eq!(&line[0..4], "ATOM");
            assert_eq!(&line[54..77], "  1.00  0.00           ");
        }
    }

    #[test]
    fn serials_increase_by_one_across_both_strands() {
        let records = b_dna_records("GATC");
        for (i, line) in records.iter().enumerate() {
            let serial: usize = line[4..11].trim().parse().unwrap();
            assert_eq!(serial, i + 1);
        }
    }

    #[test]
    fn residue_numbers_restart_per_strand() {
        let records = b_dna_records("AA");

        let first_of_chain_b = records
            .iter()
            .find(|line| line[21..22] == *"B")
            .expect("chain B missing");
        let residue: usize = first_of_chain_b[22..26].trim().parse().unwrap();
        assert_eq!(residue, 1);
    }

    #[test]
    fn strand_one_is_chain_a_and_strand_two_chain_b() {
        let records = b_dna_records("G");
        let atoms_per_strand = records.len() / 2;
        assert!(records[..atoms_per_strand]
            .iter()
            .all(|line| line[19..22] == *"G A"));
        // G pairs with C on the second strand.
        assert!(records[atoms_per_strand..]
            .iter()
            .all(|line| line[19..22] == *"C B"));
    }

    #[test]
    fn sugar_names_are_primed() {
        let records = b_dna_records("A");
        let names: Vec<&str> = records[..6].iter().map(|l| l[13..18].trim()).collect();
        assert_eq!(names, ["C5'", "O4'", "C4'", "C3'", "C2'", "C1'"]);
    }

    #[test]
    fn phosphate_names_follow_the_pdb_convention() {
        let records = b_dna_records("A");
        // Sugar (6 atoms) then adenine (10 atoms) precede the phosphate.
        let names: Vec<&str> = records[16..21].iter().map(|l| l[13..18].trim()).collect();
        assert_eq!(names, ["O5'", "OP1", "OP2", "P", "O3'"]);
    }

    #[test]
    fn thymine_methyl_renders_as_c7() {
        // Strand1 "T": sugar atoms 0-5, base atoms 6-14 with the methyl at
        // base index 2, i.e. record 8.
        let records = b_dna_records("T");
        assert_eq!(records[8][13..18].trim(), "C7");
        assert!(records.iter().all(|line| !line.contains("Me")));
    }

    #[test]
    fn lowercase_thymine_is_renamed_too() {
        let records = b_dna_records("t");
        assert_eq!(records[8][13..18].trim(), "C7");
        assert_eq!(&records[0][18..20], "DT");
    }

    #[test]
    fn element_symbol_is_the_first_character_of_the_renamed_name() {
        let records = b_dna_records("TCCCCGGGGA");
        for line in &records {
            let name = line[13..18].trim();
            let element = &line[77..78];
            assert_eq!(element, &name[..1]);
        }

        // The very first record is the first sugar-table atom.
        let first_expected = &b_dna::SUGAR[0].name[..1];
        assert_eq!(&records[0][77..78], first_expected);
    }

    #[test]
    fn end_to_end_b_dna_has_ten_residues_per_strand() {
        let helix = assemble(HelixFamily::BDna, "TCCCCGGGGA").unwrap();
        assert_eq!(helix.strand1.len(), 10);
        assert_eq!(helix.strand2.as_ref().unwrap().len(), 10);

        let records = PdbFile::records(&helix).unwrap();
        assert_eq!(records.len(), helix.atom_count());
    }

    #[test]
    fn coordinates_round_trip_to_cylindrical() {
        let helix = assemble(HelixFamily::ADna, "GATTACA").unwrap();
        let records = PdbFile::records(&helix).unwrap();

        let atoms: Vec<&CylindricalAtom> = helix
            .strands()
            .flat_map(|strand| strand.iter())
            .flat_map(|n| {
                n.sugar
                    .iter()
                    .chain(&n.base_atoms)
                    .chain(&n.phosphate)
            })
            .collect();
        assert_eq!(atoms.len(), records.len());

        for (atom, line) in atoms.iter().zip(&records) {
            let x: f64 = line[26..38].trim().parse().unwrap();
            let y: f64 = line[38..46].trim().parse().unwrap();

            let radius = (x * x + y * y).sqrt();
            assert!(
                (radius - atom.radius).abs() <= 1e-3,
                "radius {radius} vs {}",
                atom.radius
            );

            // Skip the angle check on the axis, where it is undefined.
            if atom.radius > 0.01 {
                let theta = y.atan2(x).to_degrees().rem_euclid(360.0);
                let delta = (theta - atom.theta).abs();
                let delta = delta.min(360.0 - delta);
                assert!(delta <= 0.1, "theta {theta} vs {}", atom.theta);
            }
        }
    }

    #[test]
    fn unknown_element_initial_aborts_formatting() {
        let atom = CylindricalAtom::new("Xx", 1.0, 0.0, 0.0);
        let result = format_record(1, atom.name, "DA A   1", &atom);
        assert!(matches!(
            result,
            Err(PdbError::UnrecognizedElement { name }) if name == "Xx"
        ));
    }

    #[test]
    fn write_to_emits_one_line_per_atom() {
        let helix = assemble(HelixFamily::ARna, "AUG").unwrap();
        let mut buffer = Vec::new();
        PdbFile::write_helix_to(&helix, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), helix.atom_count());
    }

    #[test]
    fn write_to_path_creates_the_file() {
        let helix = assemble(HelixFamily::BDna, "AT").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pdb");

        PdbFile::write_helix_to_path(&helix, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), helix.atom_count());
        assert!(content.starts_with("ATOM"));
    }

    #[test]
    fn coordinates_use_three_decimals_half_up() {
        for line in b_dna_records("C") {
            for range in [26..38, 38..46, 46..54] {
                let field = line[range].trim();
                if let Some((_, frac)) = field.split_once('.') {
                    assert_eq!(frac.len(), 3, "field '{field}'");
                }
            }
        }
    }
}
