// Symmetries module: Crystal classes, their rotation groups and the orientation math built on them
// This module provides fundamental-zone reduction and symmetry-aware alignment of orientations

// ======================== MODULE DECLARATIONS ========================
pub mod crystal_symmetry;
pub mod cubic_ops;
pub mod hexagonal_ops;
pub mod lower_symmetry_ops;
pub mod orthorhombic_ops;
pub mod symmetry_operations;
pub mod symmetry_point_groups;

mod _tests_symmetry_operations;

// ======================== CRYSTAL CLASSES ========================
pub use crystal_symmetry::CrystalSymmetry; // enum - Hexagonal, Cubic, Orthorhombic, Tetragonal, Trigonal, Triclinic
// CrystalSymmetry impl methods:
//   ops(self) -> &'static dyn OrientationOps                       - stateless operations for the class
//   num_operators(self) -> usize                                  - size of the rotation group
//   in_fundamental_zone(self, q: &Quaternion<f64>) -> bool        - fundamental-zone predicate
//   reduce_to_fundamental_zone(self, q: &Quaternion<f64>) -> Quaternion<f64> - canonical representative
//   nearest_equivalent(self, reference, candidate) -> Quaternion<f64> - equivalent closest to reference
//   misorientation_angle(self, a, b) -> f64                       - smallest rotation between orientations
//   point_group(&self) -> &str                                    - proper rotation group symbol
//   as_str(&self) -> &str                                         - lowercase class name

// ======================== ORIENTATION OPERATIONS ========================
pub use symmetry_operations::{
    OrientationOps,       // trait - operator table + fundamental-zone predicate, shared reduction/alignment
    operator_quaternion,  // fn(op: &[f64; 4]) -> Quaternion<f64> - table row to quaternion
};
pub use cubic_ops::CubicOps;                 // struct - 432, 24 operators
pub use hexagonal_ops::HexagonalOps;         // struct - 622, 12 operators
pub use orthorhombic_ops::OrthorhombicOps;   // struct - 222, 4 operators
pub use lower_symmetry_ops::{
    TetragonalOps, // struct - 422, 8 operators
    TrigonalOps,   // struct - 32, 6 operators
    TriclinicOps,  // struct - 1, identity only
};

// ======================== OPERATOR TABLES ========================
pub use symmetry_point_groups::{
    CUBIC_OPERATORS, HEXAGONAL_OPERATORS, ORTHORHOMBIC_OPERATORS, TETRAGONAL_OPERATORS,
    TRICLINIC_OPERATORS, TRIGONAL_OPERATORS,
};
