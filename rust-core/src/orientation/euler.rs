use serde::{Deserialize, Serialize};

/// Bunge Euler angles (phi1, Phi, phi2) in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// First rotation about the sample z axis
    pub phi1: f64,
    /// Rotation about the rotated x axis
    pub phi: f64,
    /// Second rotation about the rotated z axis
    pub phi2: f64,
}

impl EulerAngles {
    pub fn new(phi1: f64, phi: f64, phi2: f64) -> Self {
        Self { phi1, phi, phi2 }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_degrees(phi1: f64, phi: f64, phi2: f64) -> Self {
        Self::new(phi1.to_radians(), phi.to_radians(), phi2.to_radians())
    }

    pub fn to_degrees(&self) -> [f64; 3] {
        [
            self.phi1.to_degrees(),
            self.phi.to_degrees(),
            self.phi2.to_degrees(),
        ]
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.phi1, self.phi, self.phi2]
    }
}

impl From<[f64; 3]> for EulerAngles {
    fn from(angles: [f64; 3]) -> Self {
        Self::new(angles[0], angles[1], angles[2])
    }
}
