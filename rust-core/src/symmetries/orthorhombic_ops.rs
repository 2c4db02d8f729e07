use nalgebra::Quaternion;

use crate::config::FUNDAMENTAL_ZONE_TOLERANCE;
use crate::symmetries::crystal_symmetry::CrystalSymmetry;
use crate::symmetries::symmetry_operations::OrientationOps;
use crate::symmetries::symmetry_point_groups::ORTHORHOMBIC_OPERATORS;

/// Orientation operations for the orthorhombic class (222).
#[derive(Debug, Clone, Copy, Default)]
pub struct OrthorhombicOps;

impl OrientationOps for OrthorhombicOps {
    fn symmetry(&self) -> CrystalSymmetry {
        CrystalSymmetry::Orthorhombic
    }

    fn operators(&self) -> &'static [[f64; 4]] {
        &ORTHORHOMBIC_OPERATORS
    }

    // Unit cube in Rodrigues space
    fn in_fundamental_zone(&self, q: &Quaternion<f64>) -> bool {
        let bound = q.w.abs() + FUNDAMENTAL_ZONE_TOLERANCE;
        q.i.abs() <= bound && q.j.abs() <= bound && q.k.abs() <= bound
    }
}
