use nalgebra::Quaternion;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OrientationError;
use crate::symmetries::cubic_ops::CubicOps;
use crate::symmetries::hexagonal_ops::HexagonalOps;
use crate::symmetries::lower_symmetry_ops::{TetragonalOps, TriclinicOps, TrigonalOps};
use crate::symmetries::orthorhombic_ops::OrthorhombicOps;
use crate::symmetries::symmetry_operations::OrientationOps;

/// Crystal class of a phase. Selects the rotation group used for orientation math.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CrystalSymmetry {
    Hexagonal,
    Cubic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Triclinic,
}

impl CrystalSymmetry {
    pub const ALL: [CrystalSymmetry; 6] = [
        CrystalSymmetry::Hexagonal,
        CrystalSymmetry::Cubic,
        CrystalSymmetry::Orthorhombic,
        CrystalSymmetry::Tetragonal,
        CrystalSymmetry::Trigonal,
        CrystalSymmetry::Triclinic,
    ];

    /// Stateless operations object for this class.
    pub fn ops(self) -> &'static dyn OrientationOps {
        match self {
            CrystalSymmetry::Hexagonal => &HexagonalOps,
            CrystalSymmetry::Cubic => &CubicOps,
            CrystalSymmetry::Orthorhombic => &OrthorhombicOps,
            CrystalSymmetry::Tetragonal => &TetragonalOps,
            CrystalSymmetry::Trigonal => &TrigonalOps,
            CrystalSymmetry::Triclinic => &TriclinicOps,
        }
    }

    pub fn num_operators(self) -> usize {
        self.ops().num_operators()
    }

    pub fn in_fundamental_zone(self, q: &Quaternion<f64>) -> bool {
        self.ops().in_fundamental_zone(q)
    }

    pub fn reduce_to_fundamental_zone(self, q: &Quaternion<f64>) -> Quaternion<f64> {
        self.ops().reduce_to_fundamental_zone(q)
    }

    pub fn nearest_equivalent(
        self,
        reference: &Quaternion<f64>,
        candidate: &Quaternion<f64>,
    ) -> Quaternion<f64> {
        self.ops().nearest_equivalent(reference, candidate)
    }

    pub fn misorientation_angle(self, a: &Quaternion<f64>, b: &Quaternion<f64>) -> f64 {
        self.ops().misorientation_angle(a, b)
    }

    /// Hermann–Mauguin symbol of the proper rotation group.
    pub fn point_group(&self) -> &'static str {
        match self {
            CrystalSymmetry::Hexagonal => "622",
            CrystalSymmetry::Cubic => "432",
            CrystalSymmetry::Orthorhombic => "222",
            CrystalSymmetry::Tetragonal => "422",
            CrystalSymmetry::Trigonal => "32",
            CrystalSymmetry::Triclinic => "1",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CrystalSymmetry::Hexagonal => "hexagonal",
            CrystalSymmetry::Cubic => "cubic",
            CrystalSymmetry::Orthorhombic => "orthorhombic",
            CrystalSymmetry::Tetragonal => "tetragonal",
            CrystalSymmetry::Trigonal => "trigonal",
            CrystalSymmetry::Triclinic => "triclinic",
        }
    }
}

impl fmt::Display for CrystalSymmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrystalSymmetry {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        CrystalSymmetry::ALL
            .iter()
            .copied()
            .find(|sym| sym.as_str() == lowered || sym.point_group() == lowered)
            .ok_or_else(|| OrientationError::UnknownSymmetry(s.to_string()))
    }
}
