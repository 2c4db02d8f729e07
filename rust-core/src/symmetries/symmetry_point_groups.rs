// Proper rotation groups of the supported crystal classes, as (x, y, z, w) quaternion tables.
// Every table starts with the identity; the remaining order is fixed and acts as the
// deterministic tie-break for reductions.

use std::f64::consts::FRAC_1_SQRT_2;

const R: f64 = FRAC_1_SQRT_2;
const SQRT3_2: f64 = 0.866_025_403_784_438_6;

/// Cubic group 432 (24 operators).
pub const CUBIC_OPERATORS: [[f64; 4]; 24] = [
    [0.0, 0.0, 0.0, 1.0],
    // 2-fold about the cube axes
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    // 4-fold about the cube axes
    [R, 0.0, 0.0, R],
    [0.0, R, 0.0, R],
    [0.0, 0.0, R, R],
    [-R, 0.0, 0.0, R],
    [0.0, -R, 0.0, R],
    [0.0, 0.0, -R, R],
    // 2-fold about the face diagonals
    [R, R, 0.0, 0.0],
    [-R, R, 0.0, 0.0],
    [0.0, R, R, 0.0],
    [0.0, -R, R, 0.0],
    [R, 0.0, R, 0.0],
    [-R, 0.0, R, 0.0],
    // 3-fold about the body diagonals
    [0.5, 0.5, 0.5, 0.5],
    [-0.5, -0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5, 0.5],
    [-0.5, 0.5, -0.5, 0.5],
    [-0.5, 0.5, 0.5, 0.5],
    [0.5, -0.5, -0.5, 0.5],
    [-0.5, -0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5, 0.5],
];

/// Hexagonal group 622 (12 operators).
pub const HEXAGONAL_OPERATORS: [[f64; 4]; 12] = [
    [0.0, 0.0, 0.0, 1.0],
    // 6-fold about c
    [0.0, 0.0, 0.5, SQRT3_2],
    [0.0, 0.0, SQRT3_2, 0.5],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, SQRT3_2, -0.5],
    [0.0, 0.0, 0.5, -SQRT3_2],
    // 2-fold in the basal plane, every 30 degrees
    [1.0, 0.0, 0.0, 0.0],
    [SQRT3_2, 0.5, 0.0, 0.0],
    [0.5, SQRT3_2, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [-0.5, SQRT3_2, 0.0, 0.0],
    [-SQRT3_2, 0.5, 0.0, 0.0],
];

/// Orthorhombic group 222 (4 operators).
pub const ORTHORHOMBIC_OPERATORS: [[f64; 4]; 4] = [
    [0.0, 0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
];

/// Tetragonal group 422 (8 operators).
pub const TETRAGONAL_OPERATORS: [[f64; 4]; 8] = [
    [0.0, 0.0, 0.0, 1.0],
    // 4-fold about c
    [0.0, 0.0, R, R],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, -R, R],
    // 2-fold about a, b and the diagonals
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [R, R, 0.0, 0.0],
    [-R, R, 0.0, 0.0],
];

/// Trigonal group 32 (6 operators).
pub const TRIGONAL_OPERATORS: [[f64; 4]; 6] = [
    [0.0, 0.0, 0.0, 1.0],
    // 3-fold about c
    [0.0, 0.0, SQRT3_2, 0.5],
    [0.0, 0.0, -SQRT3_2, 0.5],
    // 2-fold in the basal plane, every 120 degrees
    [1.0, 0.0, 0.0, 0.0],
    [-0.5, SQRT3_2, 0.0, 0.0],
    [-0.5, -SQRT3_2, 0.0, 0.0],
];

/// Triclinic group 1.
pub const TRICLINIC_OPERATORS: [[f64; 4]; 1] = [[0.0, 0.0, 0.0, 1.0]];
