// Orientation module: Euler angle triples and their quaternion counterparts
// This module provides the stateless conversions every other module builds on

// ======================== MODULE DECLARATIONS ========================
pub mod euler;
pub mod quaternion;

// Test modules
mod _tests_quaternion;

// ======================== EULER ANGLES ========================
pub use euler::EulerAngles; // struct - Bunge (phi1, Phi, phi2) triple in radians
// EulerAngles impl methods:
//   new(phi1: f64, phi: f64, phi2: f64) -> Self                   - creates a triple
//   zero() -> Self                                                - the unrotated triple
//   from_degrees(phi1: f64, phi: f64, phi2: f64) -> Self          - creates a triple from degrees
//   to_degrees(&self) -> [f64; 3]                                 - returns the triple in degrees
//   as_array(&self) -> [f64; 3]                                   - returns the raw triple

// ======================== QUATERNION CODEC ========================
pub use quaternion::{
    euler_to_quaternion,  // fn(euler: &EulerAngles) -> Quaternion<f64> - half-angle conversion
    quaternion_to_euler,  // fn(q: &Quaternion<f64>) -> EulerAngles - inverse conversion, sign agnostic
    canonical,            // fn(q: Quaternion<f64>) -> Quaternion<f64> - picks the hemisphere with w >= 0
    rotation_angle,       // fn(q: &Quaternion<f64>) -> f64 - rotation angle in [0, pi]
    normalize_or_identity, // fn(q: &Quaternion<f64>) -> Quaternion<f64> - unit quaternion, identity for zero input
};
