//! # I/O Module
//!
//! Renders a finished helix to its two text formats.
//!
//! ## Overview
//!
//! - [`pdb`] - Fixed-column atom records for structure viewers
//! - [`table`] - A human-readable tabular dump of the cylindrical
//!   coordinates
//! - [`traits`] - The shared [`HelixFile`](traits::HelixFile) write
//!   interface
//!
//! Both renderers are pure projections of an immutable
//! [`Helix`](crate::core::models::helix::Helix); neither performs any I/O
//! of its own beyond the caller-supplied writer.

pub mod pdb;
pub mod table;
pub mod traits;

/// Rounds to the given number of decimals, ties away from zero.
///
/// Both output formats round this way; the default float formatting rounds
/// ties to even and would disagree on exact half values.
pub(crate) fn round_half_up(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Formats a value with a fixed number of decimals, ties away from zero.
pub(crate) fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, round_half_up(value, decimals as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_ties_away_from_zero() {
        assert_eq!(round_half_up(0.5, 0), 1.0);
        assert_eq!(round_half_up(1.5, 0), 2.0);
        assert_eq!(round_half_up(2.5, 0), 3.0);
        assert_eq!(round_half_up(-0.5, 0), -1.0);
        assert_eq!(round_half_up(-2.5, 0), -3.0);
    }

    #[test]
    fn respects_the_decimal_count() {
        assert_eq!(format_decimal(3.14159, 3), "3.142");
        assert_eq!(format_decimal(3.14159, 1), "3.1");
        assert_eq!(format_decimal(2.0, 2), "2.00");
    }

    #[test]
    fn keeps_the_sign_of_small_negatives() {
        assert_eq!(format_decimal(-0.0004, 3), "-0.000");
        assert_eq!(format_decimal(-1.2345, 2), "-1.23");
    }
}
