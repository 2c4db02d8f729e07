// Tetragonal, trigonal and triclinic classes.

use nalgebra::Quaternion;
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

use crate::config::FUNDAMENTAL_ZONE_TOLERANCE;
use crate::symmetries::crystal_symmetry::CrystalSymmetry;
use crate::symmetries::symmetry_operations::OrientationOps;
use crate::symmetries::symmetry_point_groups::{
    TETRAGONAL_OPERATORS, TRICLINIC_OPERATORS, TRIGONAL_OPERATORS,
};

// tan(30°)
const TAN_PI_6: f64 = 0.577_350_269_189_625_8;

const TRIGONAL_TWOFOLD_AXES: [(f64, f64); 3] = [
    (1.0, 0.0),
    (-0.5, 0.866_025_403_784_438_6),
    (-0.5, -0.866_025_403_784_438_6),
];

/// Orientation operations for the tetragonal class (422).
#[derive(Debug, Clone, Copy, Default)]
pub struct TetragonalOps;

impl OrientationOps for TetragonalOps {
    fn symmetry(&self) -> CrystalSymmetry {
        CrystalSymmetry::Tetragonal
    }

    fn operators(&self) -> &'static [[f64; 4]] {
        &TETRAGONAL_OPERATORS
    }

    /// Octagonal prism: |r_z| <= sqrt(2) - 1, |r_x|, |r_y| <= 1 and |r_x ± r_y| <= sqrt(2).
    fn in_fundamental_zone(&self, q: &Quaternion<f64>) -> bool {
        let w = q.w.abs();
        let tol = FUNDAMENTAL_ZONE_TOLERANCE;

        q.k.abs() <= (SQRT_2 - 1.0) * w + tol
            && q.i.abs() <= w + tol
            && q.j.abs() <= w + tol
            && FRAC_1_SQRT_2 * (q.i + q.j).abs() <= w + tol
            && FRAC_1_SQRT_2 * (q.i - q.j).abs() <= w + tol
    }
}

/// Orientation operations for the trigonal class (32).
#[derive(Debug, Clone, Copy, Default)]
pub struct TrigonalOps;

impl OrientationOps for TrigonalOps {
    fn symmetry(&self) -> CrystalSymmetry {
        CrystalSymmetry::Trigonal
    }

    fn operators(&self) -> &'static [[f64; 4]] {
        &TRIGONAL_OPERATORS
    }

    /// Hexagonal prism: |r_z| <= tan(30°) and |r . n| <= 1 for the three basal 2-fold axes.
    fn in_fundamental_zone(&self, q: &Quaternion<f64>) -> bool {
        let w = q.w.abs();

        q.k.abs() <= TAN_PI_6 * w + FUNDAMENTAL_ZONE_TOLERANCE
            && TRIGONAL_TWOFOLD_AXES
                .iter()
                .all(|&(c, s)| (q.i * c + q.j * s).abs() <= w + FUNDAMENTAL_ZONE_TOLERANCE)
    }
}

/// Orientation operations for the triclinic class (1). Every orientation is already reduced.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriclinicOps;

impl OrientationOps for TriclinicOps {
    fn symmetry(&self) -> CrystalSymmetry {
        CrystalSymmetry::Triclinic
    }

    fn operators(&self) -> &'static [[f64; 4]] {
        &TRICLINIC_OPERATORS
    }

    fn in_fundamental_zone(&self, _q: &Quaternion<f64>) -> bool {
        true
    }
}
