//! Grain orientation averaging library
//!
//! Computes one representative crystallographic orientation per grain of a voxelized
//! microstructure. Per-voxel Euler angles are reduced to the fundamental zone of their
//! phase's crystal symmetry, aligned onto the grain's running mean (symmetry equivalents
//! and the quaternion double cover included) and averaged.

pub mod averaging;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod orientation;
pub mod symmetries;

pub use error::OrientationError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, OrientationError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
