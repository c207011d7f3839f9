//! Reference geometry of the A-DNA family.

use super::super::GeometryEntry;

/// Angle the helix turns with each nucleotide, in tenths of a degree.
pub const TWIST_DECI_DEGREES: i32 = 327;

/// Distance the helix rises with each nucleotide, in hundredths of an
/// Angstrom.
pub const RISE_CENTI_ANGSTROMS: i32 = 256;

#[rustfmt::skip]
pub static PHOSPHATE: [GeometryEntry; 5] = [
    GeometryEntry::new("O1",  958,  744, -287),
    GeometryEntry::new("O2",  996,  679, -510),
    GeometryEntry::new("O3",  769,  739, -453),
    GeometryEntry::new("P1",  892,  692, -406),
    GeometryEntry::new("O4",  870,  601, -333),
];

#[rustfmt::skip]
pub static SUGAR: [GeometryEntry; 6] = [
    GeometryEntry::new("C5",  991,  554, -319),
    GeometryEntry::new("O4",  922,  440, -186),
    GeometryEntry::new("C4",  977,  466, -313),
    GeometryEntry::new("C3",  891,  422, -417),
    GeometryEntry::new("C2",  881,  334, -350),
    GeometryEntry::new("C1",  859,  359, -204),
];

#[rustfmt::skip]
pub static ADENINE: [GeometryEntry; 10] = [
    GeometryEntry::new("N9",  716,  361, -162),
    GeometryEntry::new("C8",  640,  457, -161),
    GeometryEntry::new("N7",  518,  448, -119),
    GeometryEntry::new("C5",  522,  298,  -91),
    GeometryEntry::new("N6",  319,  148,  -13),
    GeometryEntry::new("C6",  449,  167,  -43),
    GeometryEntry::new("N1",  540,   53,  -26),
    GeometryEntry::new("C2",  665,   84,  -56),
    GeometryEntry::new("N3",  725,  173, -102),
    GeometryEntry::new("C4",  652,  267, -117),
];

#[rustfmt::skip]
pub static GUANINE: [GeometryEntry; 11] = [
    GeometryEntry::new("N9",  716,  361, -162),
    GeometryEntry::new("C8",  638,  457, -160),
    GeometryEntry::new("N7",  514,  446, -117),
    GeometryEntry::new("C5",  520,  294,  -90),
    GeometryEntry::new("O6",  327,  132,  -11),
    GeometryEntry::new("C6",  444,  164,  -41),
    GeometryEntry::new("N1",  546,   53,  -27),
    GeometryEntry::new("N2",  771,    7,  -37),
    GeometryEntry::new("C2",  678,   81,  -57),
    GeometryEntry::new("N3",  730,  174, -103),
    GeometryEntry::new("C4",  652,  266, -117),
];

#[rustfmt::skip]
pub static CYTOSINE: [GeometryEntry; 8] = [
    GeometryEntry::new("N1",  716,  361, -162),
    GeometryEntry::new("C6",  655,  463, -166),
    GeometryEntry::new("C5",  528,  491, -129),
    GeometryEntry::new("N4",  330,  345,  -46),
    GeometryEntry::new("C4",  457,  355,  -84),
    GeometryEntry::new("N3",  541,  235,  -80),
    GeometryEntry::new("O2",  761,  192, -117),
    GeometryEntry::new("C2",  669,  259, -119),
];

#[rustfmt::skip]
pub static THYMINE: [GeometryEntry; 9] = [
    GeometryEntry::new("N1",  716,  361, -162),
    GeometryEntry::new("C6",  655,  464, -167),
    GeometryEntry::new("Me",  498,  657, -133),
    GeometryEntry::new("C5",  530,  493, -130),
    GeometryEntry::new("O4",  330,  355,  -47),
    GeometryEntry::new("C4",  448,  364,  -83),
    GeometryEntry::new("N3",  539,  243,  -82),
    GeometryEntry::new("O2",  756,  190, -115),
    GeometryEntry::new("C2",  671,  260, -120),
];
