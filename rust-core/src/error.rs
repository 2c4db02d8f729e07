use thiserror::Error;

/// Precondition failures of an averaging pass. None of them are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrientationError {
    #[error("Missing input array: {0}")]
    MissingInput(&'static str),

    #[error("Input array `{array}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        array: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Voxel {voxel} references phase {phase_id}, which has no crystal symmetry entry")]
    MissingPhase { voxel: usize, phase_id: usize },

    #[error("Voxel {voxel} references grain {grain_id}, but only {num_grains} grain slots were declared")]
    GrainOutOfRange {
        voxel: usize,
        grain_id: usize,
        num_grains: usize,
    },

    #[error("Unknown crystal symmetry: {0}")]
    UnknownSymmetry(String),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}
