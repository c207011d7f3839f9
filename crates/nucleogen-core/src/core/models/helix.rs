use super::nucleotide::Nucleotide;

/// A complete helix model: one nucleotide list per strand.
///
/// `strand2` is `None` exactly when the helix family is single-stranded
/// (A-RNA). For double-stranded families an empty input sequence still
/// produces `Some` with an empty list, so presence of the second strand
/// depends only on the family, never on the sequence. The helix exclusively
/// owns its nucleotides; nothing is shared or cached between builds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Helix {
    /// The strand built by walking the input sequence forward.
    pub strand1: Vec<Nucleotide>,
    /// The antiparallel complementary strand, absent for single-stranded
    /// families.
    pub strand2: Option<Vec<Nucleotide>>,
}

impl Helix {
    /// Whether a second strand is present.
    pub fn is_double_stranded(&self) -> bool {
        self.strand2.is_some()
    }

    /// Iterates over the present strands, first strand first.
    pub fn strands(&self) -> impl Iterator<Item = &[Nucleotide]> {
        std::iter::once(self.strand1.as_slice()).chain(self.strand2.as_deref())
    }

    /// Total number of atoms across all strands.
    pub fn atom_count(&self) -> usize {
        self.strands()
            .flat_map(|strand| strand.iter())
            .map(Nucleotide::atom_count)
            .sum()
    }
}
