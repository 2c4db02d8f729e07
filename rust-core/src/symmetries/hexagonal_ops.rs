use nalgebra::Quaternion;

use crate::config::FUNDAMENTAL_ZONE_TOLERANCE;
use crate::symmetries::crystal_symmetry::CrystalSymmetry;
use crate::symmetries::symmetry_operations::OrientationOps;
use crate::symmetries::symmetry_point_groups::HEXAGONAL_OPERATORS;

// tan(15°)
const TAN_PI_12: f64 = 0.267_949_192_431_122_7;

// (cos, sin) of the six in-plane 2-fold axes, 30 degrees apart
const TWOFOLD_AXES: [(f64, f64); 6] = [
    (1.0, 0.0),
    (0.866_025_403_784_438_6, 0.5),
    (0.5, 0.866_025_403_784_438_6),
    (0.0, 1.0),
    (-0.5, 0.866_025_403_784_438_6),
    (-0.866_025_403_784_438_6, 0.5),
];

/// Orientation operations for the hexagonal class (622).
#[derive(Debug, Clone, Copy, Default)]
pub struct HexagonalOps;

impl OrientationOps for HexagonalOps {
    fn symmetry(&self) -> CrystalSymmetry {
        CrystalSymmetry::Hexagonal
    }

    fn operators(&self) -> &'static [[f64; 4]] {
        &HEXAGONAL_OPERATORS
    }

    /// Dodecagonal prism in Rodrigues space: |r_z| <= tan(15°) against the 6-fold axis and
    /// |r . n| <= 1 against each basal 2-fold axis n.
    fn in_fundamental_zone(&self, q: &Quaternion<f64>) -> bool {
        let w = q.w.abs();

        q.k.abs() <= TAN_PI_12 * w + FUNDAMENTAL_ZONE_TOLERANCE
            && TWOFOLD_AXES
                .iter()
                .all(|&(c, s)| (q.i * c + q.j * s).abs() <= w + FUNDAMENTAL_ZONE_TOLERANCE)
    }
}
