//! Reference geometry of the B-DNA family.

use super::super::GeometryEntry;

/// Angle the helix turns with each nucleotide, in tenths of a degree.
pub const TWIST_DECI_DEGREES: i32 = 360;

/// Distance the helix rises with each nucleotide, in hundredths of an
/// Angstrom.
pub const RISE_CENTI_ANGSTROMS: i32 = 338;

#[rustfmt::skip]
pub static PHOSPHATE: [GeometryEntry; 5] = [
    GeometryEntry::new("O1",  875,  974,  363),
    GeometryEntry::new("O2", 1020,  911,  186),
    GeometryEntry::new("O3",  882, 1033,  129),
    GeometryEntry::new("P1",  891,  952,  208),
    GeometryEntry::new("O4",  773,  880,  183),
];

#[rustfmt::skip]
pub static SUGAR: [GeometryEntry; 6] = [
    GeometryEntry::new("C5",  770,  798,  277),
    GeometryEntry::new("O4",  622,  660,  183),
    GeometryEntry::new("C4",  759,  699,  204),
    GeometryEntry::new("C3",  820,  699,   64),
    GeometryEntry::new("C2",  704,  732,  -24),
    GeometryEntry::new("C1",  586,  674,   47),
];

#[rustfmt::skip]
pub static ADENINE: [GeometryEntry; 10] = [
    GeometryEntry::new("N9",  463,  766,   42),
    GeometryEntry::new("C8",  484,  930,   50),
    GeometryEntry::new("N7",  395, 1054,   43),
    GeometryEntry::new("C5",  274,  940,   28),
    GeometryEntry::new("N6",  183, 1540,   14),
    GeometryEntry::new("C6",  141, 1072,   15),
    GeometryEntry::new("N1",   86,  401,    3),
    GeometryEntry::new("C2",  217,  306,    4),
    GeometryEntry::new("N3",  324,  470,   16),
    GeometryEntry::new("C4",  333,  705,   28),
];

#[rustfmt::skip]
pub static GUANINE: [GeometryEntry; 11] = [
    GeometryEntry::new("N9",  463,  766,   42),
    GeometryEntry::new("C8",  482,  932,   50),
    GeometryEntry::new("N7",  392, 1057,   42),
    GeometryEntry::new("C5",  270,  940,   28),
    GeometryEntry::new("O6",  171, 1546,   13),
    GeometryEntry::new("C6",  139, 1093,   15),
    GeometryEntry::new("N1",   92,  379,    3),
    GeometryEntry::new("N2",  301,   42,  -10),
    GeometryEntry::new("C2",  228,  287,    3),
    GeometryEntry::new("N3",  329,  467,   16),
    GeometryEntry::new("C4",  333,  703,   28),
];

#[rustfmt::skip]
pub static CYTOSINE: [GeometryEntry; 8] = [
    GeometryEntry::new("N1",  463,  766,   42),
    GeometryEntry::new("C6",  499,  922,   52),
    GeometryEntry::new("C5",  435, 1070,   47),
    GeometryEntry::new("N4",  276, 1366,   27),
    GeometryEntry::new("C4",  294, 1100,   32),
    GeometryEntry::new("N3",  231,  839,   22),
    GeometryEntry::new("O2",  369,  479,   18),
    GeometryEntry::new("C2",  340,  674,   27),
];

#[rustfmt::skip]
pub static THYMINE: [GeometryEntry; 9] = [
    GeometryEntry::new("N1",  463,  766,   42),
    GeometryEntry::new("C6",  501,  923,   52),
    GeometryEntry::new("Me",  540, 1198,   58),
    GeometryEntry::new("C5",  438, 1069,   47),
    GeometryEntry::new("O4",  282, 1363,   27),
    GeometryEntry::new("C4",  298, 1119,   32),
    GeometryEntry::new("N3",  236,  852,   23),
    GeometryEntry::new("O2",  364,  478,   18),
    GeometryEntry::new("C2",  342,  673,   27),
];
