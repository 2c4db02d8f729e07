use nalgebra::Quaternion;
use std::f64::consts::SQRT_2;

use crate::config::FUNDAMENTAL_ZONE_TOLERANCE;
use crate::symmetries::crystal_symmetry::CrystalSymmetry;
use crate::symmetries::symmetry_operations::OrientationOps;
use crate::symmetries::symmetry_point_groups::CUBIC_OPERATORS;

/// Orientation operations for the cubic class (432).
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicOps;

impl OrientationOps for CubicOps {
    fn symmetry(&self) -> CrystalSymmetry {
        CrystalSymmetry::Cubic
    }

    fn operators(&self) -> &'static [[f64; 4]] {
        &CUBIC_OPERATORS
    }

    /// Truncated cube in Rodrigues space: |r_i| <= sqrt(2) - 1 against the 4-fold axes,
    /// |r_x| + |r_y| + |r_z| <= 1 against the 3-fold axes. Evaluated as w-scaled bounds so
    /// that half-turns (w = 0) need no division.
    fn in_fundamental_zone(&self, q: &Quaternion<f64>) -> bool {
        let w = q.w.abs();
        let (x, y, z) = (q.i.abs(), q.j.abs(), q.k.abs());

        x.max(y).max(z) <= (SQRT_2 - 1.0) * w + FUNDAMENTAL_ZONE_TOLERANCE
            && x + y + z <= w + FUNDAMENTAL_ZONE_TOLERANCE
    }
}
