use std::fmt;

/// The five nucleobases that can occur in a helix model.
///
/// The DNA families use A, T, G and C; the RNA family replaces thymine with
/// uracil. Parsing is ASCII case-insensitive, and every base knows its
/// one-letter code, its full chemical name and its Watson-Crick partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleobase {
    Adenine,  // A
    Thymine,  // T (DNA only)
    Guanine,  // G
    Cytosine, // C
    Uracil,   // U (RNA only)
}

impl Nucleobase {
    /// Parses a one-letter base code, folding case.
    ///
    /// # Arguments
    ///
    /// * `letter` - The one-letter code of a nucleobase.
    ///
    /// # Return
    ///
    /// Returns `Some(Nucleobase)` for A/T/G/C/U in either case, otherwise
    /// `None`.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Nucleobase::Adenine),
            'T' => Some(Nucleobase::Thymine),
            'G' => Some(Nucleobase::Guanine),
            'C' => Some(Nucleobase::Cytosine),
            'U' => Some(Nucleobase::Uracil),
            _ => None,
        }
    }

    /// Returns the uppercase one-letter code of the base.
    pub fn letter(self) -> char {
        match self {
            Nucleobase::Adenine => 'A',
            Nucleobase::Thymine => 'T',
            Nucleobase::Guanine => 'G',
            Nucleobase::Cytosine => 'C',
            Nucleobase::Uracil => 'U',
        }
    }

    /// Returns the full chemical name of the base.
    pub fn full_name(self) -> &'static str {
        match self {
            Nucleobase::Adenine => "Adenine",
            Nucleobase::Thymine => "Thymine",
            Nucleobase::Guanine => "Guanine",
            Nucleobase::Cytosine => "Cytosine",
            Nucleobase::Uracil => "Uracil",
        }
    }

    /// Returns the Watson-Crick pairing partner of the base.
    ///
    /// Uracil is never an input base of a double-stranded family and has no
    /// partner here; callers turn the `None` into an unknown-base error.
    pub fn complement(self) -> Option<Self> {
        match self {
            Nucleobase::Adenine => Some(Nucleobase::Thymine),
            Nucleobase::Thymine => Some(Nucleobase::Adenine),
            Nucleobase::Guanine => Some(Nucleobase::Cytosine),
            Nucleobase::Cytosine => Some(Nucleobase::Guanine),
            Nucleobase::Uracil => None,
        }
    }
}

impl fmt::Display for Nucleobase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}
