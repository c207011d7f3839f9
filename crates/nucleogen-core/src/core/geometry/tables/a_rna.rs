//! Reference geometry of the A-RNA family.
//!
//! The only single-stranded family, and the only one whose sugar is a
//! ribose (the extra "O2" hydroxyl oxygen) and whose base set replaces
//! thymine with uracil.

use super::super::GeometryEntry;

/// Angle the helix turns with each nucleotide, in tenths of a degree.
pub const TWIST_DECI_DEGREES: i32 = 327;

/// Distance the helix rises with each nucleotide, in hundredths of an
/// Angstrom.
pub const RISE_CENTI_ANGSTROMS: i32 = 281;

#[rustfmt::skip]
pub static PHOSPHATE: [GeometryEntry; 5] = [
    GeometryEntry::new("O1",  954,  728, -244),
    GeometryEntry::new("O2",  959,  712, -494),
    GeometryEntry::new("O3",  750,  766, -380),
    GeometryEntry::new("P1",  871,  705, -375),
    GeometryEntry::new("O4",  849,  601, -348),
];

#[rustfmt::skip]
pub static SUGAR: [GeometryEntry; 7] = [
    GeometryEntry::new("C5",  975,  558, -335),
    GeometryEntry::new("O4",  915,  453, -177),
    GeometryEntry::new("C4",  968,  469, -310),
    GeometryEntry::new("C3",  886,  414, -402),
    GeometryEntry::new("O2", 1015,  302, -314),
    GeometryEntry::new("C2",  882,  332, -317),
    GeometryEntry::new("C1",  855,  369, -177),
];

#[rustfmt::skip]
pub static ADENINE: [GeometryEntry; 10] = [
    GeometryEntry::new("N9",  712,  372, -139),
    GeometryEntry::new("C8",  639,  470, -133),
    GeometryEntry::new("N7",  515,  462,  -95),
    GeometryEntry::new("C5",  514,  309,  -75),
    GeometryEntry::new("N6",  308,  156,   -5),
    GeometryEntry::new("C6",  439,  174,  -34),
    GeometryEntry::new("N1",  528,   55,  -24),
    GeometryEntry::new("C2",  654,   87,  -54),
    GeometryEntry::new("N3",  715,  180,  -93),
    GeometryEntry::new("C4",  644,  276, -101),
];

#[rustfmt::skip]
pub static GUANINE: [GeometryEntry; 11] = [
    GeometryEntry::new("N9",  712,  372, -139),
    GeometryEntry::new("C8",  636,  470, -132),
    GeometryEntry::new("N7",  511,  460,  -94),
    GeometryEntry::new("C5",  513,  305,  -74),
    GeometryEntry::new("O6",  316,  139,   -4),
    GeometryEntry::new("C6",  434,  171,  -33),
    GeometryEntry::new("N1",  535,   55,  -26),
    GeometryEntry::new("N2",  758,    7,  -42),
    GeometryEntry::new("C2",  667,   85,  -55),
    GeometryEntry::new("N3",  720,  180,  -94),
    GeometryEntry::new("C4",  644,  275, -101),
];

#[rustfmt::skip]
pub static CYTOSINE: [GeometryEntry; 8] = [
    GeometryEntry::new("N1",  712,  372, -139),
    GeometryEntry::new("C6",  653,  476, -138),
    GeometryEntry::new("C5",  526,  506, -103),
    GeometryEntry::new("N4",  323,  361,  -31),
    GeometryEntry::new("C4",  450,  368,  -67),
    GeometryEntry::new("N3",  532,  244,  -68),
    GeometryEntry::new("O2",  751,  199, -106),
    GeometryEntry::new("C2",  661,  268, -104),
];

#[rustfmt::skip]
pub static URACIL: [GeometryEntry; 8] = [
    GeometryEntry::new("N1",  712,  372, -139),
    GeometryEntry::new("C6",  654,  477, -138),
    GeometryEntry::new("C5",  528,  508, -104),
    GeometryEntry::new("O4",  324,  371,  -32),
    GeometryEntry::new("C4",  442,  378,  -66),
    GeometryEntry::new("N3",  531,  252,  -69),
    GeometryEntry::new("O2",  746,  196, -104),
    GeometryEntry::new("C2",  663,  269, -104),
];
