use super::format_decimal;
use super::traits::HelixFile;
use crate::core::models::atom::CylindricalAtom;
use crate::core::models::helix::Helix;
use crate::core::models::nucleotide::Nucleotide;
use std::io::{self, Write};
use thiserror::Error;

/// Rendering options for the tabular dump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
    /// Factor from Angstroms to the secondary linear unit column
    /// (centimeters on a 1:1.25 scale model).
    pub scale: f64,
    /// Constant offset added to the scaled height column only, for models
    /// whose base plate sits above zero.
    pub height_offset: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            scale: 1.25,
            height_offset: 0.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Renders a helix as a human-readable tab-separated dump.
///
/// One block per nucleotide: the full chemical name, then `Sugar`,
/// `Phosphate` and `Base` sections listing each atom's cylindrical
/// coordinates in Angstroms and in the secondary scaled unit, closed by a
/// blank line. Strand sections are introduced by their reading direction;
/// the second section is omitted entirely for single-stranded helices.
pub struct TableFile;

impl TableFile {
    /// Renders the dump as ordered lines.
    pub fn lines(helix: &Helix, options: &TableOptions) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(
            "Atom\tRadius [Å]\tRadius [cm]\tθ [°]\tHeight [Å]\tHeight [cm]"
                .to_string(),
        );

        lines.push("3' -> 5'".to_string());
        for nucleotide in &helix.strand1 {
            push_nucleotide(&mut lines, nucleotide, options);
        }

        if let Some(strand2) = &helix.strand2 {
            lines.push("5' -> 3'".to_string());
            for nucleotide in strand2 {
                push_nucleotide(&mut lines, nucleotide, options);
            }
        }

        lines
    }
}

fn push_nucleotide(lines: &mut Vec<String>, nucleotide: &Nucleotide, options: &TableOptions) {
    lines.push(nucleotide.base.full_name().to_string());

    lines.push("Sugar".to_string());
    lines.extend(nucleotide.sugar.iter().map(|atom| atom_line(atom, options)));

    lines.push("Phosphate".to_string());
    lines.extend(
        nucleotide
            .phosphate
            .iter()
            .map(|atom| atom_line(atom, options)),
    );

    lines.push("Base".to_string());
    lines.extend(
        nucleotide
            .base_atoms
            .iter()
            .map(|atom| atom_line(atom, options)),
    );

    lines.push(String::new());
}

fn atom_line(atom: &CylindricalAtom, options: &TableOptions) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        atom.name,
        format_decimal(atom.radius, 2),
        format_decimal(atom.radius * options.scale, 1),
        format_decimal(atom.theta, 1),
        format_decimal(atom.height, 2),
        format_decimal(atom.height * options.scale + options.height_offset, 1),
    )
}

impl HelixFile for TableFile {
    type Options = TableOptions;
    type Error = TableError;

    fn write_to(
        helix: &Helix,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        for line in Self::lines(helix, options) {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::HelixFamily;
    use crate::engine::assembler::assemble;

    fn dump(family: HelixFamily, sequence: &str) -> Vec<String> {
        let helix = assemble(family, sequence).unwrap();
        TableFile::lines(&helix, &TableOptions::default())
    }

    #[test]
    fn header_and_strand_markers_come_first() {
        let lines = dump(HelixFamily::BDna, "A");
        assert_eq!(
            lines[0],
            "Atom\tRadius [Å]\tRadius [cm]\tθ [°]\tHeight [Å]\tHeight [cm]"
        );
        assert_eq!(lines[1], "3' -> 5'");
        assert!(lines.contains(&"5' -> 3'".to_string()));
    }

    #[test]
    fn single_stranded_dump_omits_the_second_section() {
        let lines = dump(HelixFamily::ARna, "AU");
        assert!(!lines.contains(&"5' -> 3'".to_string()));
    }

    #[test]
    fn each_nucleotide_block_has_name_sections_and_separator() {
        let lines = dump(HelixFamily::ARna, "G");

        assert_eq!(lines[2], "Guanine");
        assert_eq!(lines[3], "Sugar");
        // A-RNA ribose has 7 atoms.
        assert_eq!(lines[11], "Phosphate");
        assert_eq!(lines[17], "Base");
        // Guanine has 11 atoms, then the blank separator closes the block.
        assert_eq!(lines[29], "");
        assert_eq!(lines.len(), 30);
    }

    #[test]
    fn atom_lines_carry_six_tab_separated_columns() {
        let lines = dump(HelixFamily::BDna, "C");
        let atom_line = &lines[4];
        let columns: Vec<&str> = atom_line.split('\t').collect();
        assert_eq!(columns.len(), 6);
        // B-DNA sugar starts with C5 at radius 7.70.
        assert_eq!(columns[0], "C5");
        assert_eq!(columns[1], "7.70");
        assert_eq!(columns[2], "9.6");
    }

    #[test]
    fn height_offset_shifts_only_the_scaled_column() {
        let helix = assemble(HelixFamily::BDna, "A").unwrap();
        let plain = TableFile::lines(&helix, &TableOptions::default());
        let shifted = TableFile::lines(
            &helix,
            &TableOptions {
                scale: 1.25,
                height_offset: 15.0,
            },
        );

        let plain_cols: Vec<&str> = plain[4].split('\t').collect();
        let shifted_cols: Vec<&str> = shifted[4].split('\t').collect();

        assert_eq!(plain_cols[..5], shifted_cols[..5]);
        let plain_height: f64 = plain_cols[5].parse().unwrap();
        let shifted_height: f64 = shifted_cols[5].parse().unwrap();
        assert!((shifted_height - plain_height - 15.0).abs() < 1e-9);
    }

    #[test]
    fn write_to_emits_every_line() {
        let helix = assemble(HelixFamily::BDna, "AT").unwrap();
        let mut buffer = Vec::new();
        TableFile::write_helix_to(&helix, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let expected = TableFile::lines(&helix, &TableOptions::default());
        assert_eq!(text.lines().count(), expected.len());
    }
}
