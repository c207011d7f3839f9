use nalgebra::Point3;

/// A single placed atom in helical (cylindrical) coordinates.
///
/// Atoms are produced by evaluating a reference geometry table at the
/// current position along the helix axis and are immutable afterwards. The
/// angle is always wrapped into `[0, 360)` degrees at creation time; the
/// name is the geometry-table name, before any output-format renaming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylindricalAtom {
    /// The geometry-table name of the atom (e.g. "C5", "P1", "Me").
    pub name: &'static str,
    /// Distance from the helix axis, in Angstroms.
    pub radius: f64,
    /// Angle around the axis, in degrees, within `[0, 360)`.
    pub theta: f64,
    /// Height along the axis, in Angstroms.
    pub height: f64,
}

impl CylindricalAtom {
    /// Creates a new atom at the given cylindrical position.
    pub fn new(name: &'static str, radius: f64, theta: f64, height: f64) -> Self {
        Self {
            name,
            radius,
            theta,
            height,
        }
    }

    /// Projects the atom onto Cartesian axes.
    ///
    /// # Return
    ///
    /// The point `(r·cos θ, r·sin θ, height)` with θ taken in radians.
    pub fn cartesian(&self) -> Point3<f64> {
        let theta = self.theta.to_radians();
        Point3::new(
            self.radius * theta.cos(),
            self.radius * theta.sin(),
            self.height,
        )
    }
}
