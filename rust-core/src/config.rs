use serde::{Deserialize, Serialize};

use crate::error::OrientationError;

// Constants

// Tolerances
pub const QUATERNION_TOLERANCE: f64 = 1e-12; // Below this norm a quaternion is treated as zero
pub const FUNDAMENTAL_ZONE_TOLERANCE: f64 = 1e-9; // Slack on the fundamental-zone boundary planes

// Default voxel count per parallel work item
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Knobs for a single averaging pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AveragingConfig {
    /// Rescale the mean quaternion to unit length before converting it to Euler angles.
    pub renormalize: bool,
    /// Map the finalized mean back into the fundamental zone, so the reported orientation
    /// does not depend on which branch the first sample seeded.
    pub reduce_average: bool,
    /// Spread the accumulation pass over the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
    /// Minimum number of voxels handed to one worker.
    pub chunk_size: usize,
    /// Keep the fundamental-zone quaternion of every processed voxel in the summary.
    pub store_voxel_quaternions: bool,
}

impl Default for AveragingConfig {
    fn default() -> Self {
        Self {
            renormalize: true,
            reduce_average: true,
            parallel: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
            store_voxel_quaternions: false,
        }
    }
}

impl AveragingConfig {
    /// Sequential pass with otherwise default settings.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), OrientationError> {
        if self.chunk_size == 0 {
            return Err(OrientationError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
