// Averaging module: Per-grain mean orientations from per-voxel measurements
// This module provides the voxel input model, the grain accumulators and the averaging engine

// ======================== MODULE DECLARATIONS ========================
pub mod grain_accumulator;
pub mod grain_averaging;
pub mod misorientation;
pub mod synthetic;
pub mod voxel_data;


// ======================== INPUT MODEL ========================
pub use voxel_data::{
    VoxelSource,  // trait - per-voxel grain ids, phases and Euler angles of the data container
    VoxelDataset, // struct - owned voxel arrays implementing VoxelSource
    PhaseTable,   // struct - phase id -> CrystalSymmetry lookup
    VoxelView,    // struct - validated borrowed view used inside a pass
};

// ======================== ACCUMULATION ========================
pub use grain_accumulator::{
    GrainAccumulator, // struct - weight and quaternion component sums of one grain
    AccumulatorSet,   // struct - one accumulator per grain slot, mergeable
    PartialAccumulators, // struct - sparse per-chunk accumulators keyed by grain id
    GrainOrientation, // struct - finalized average quaternion and Euler angles of a grain
};
// GrainAccumulator impl methods:
//   add_sample(&mut self, symmetry, sample: &Quaternion<f64>) -> Quaternion<f64> - aligns and adds a sample
//   merge(&mut self, other: &GrainAccumulator)                    - folds in a partial sum, re-aligned
//   mean(&self) -> Option<Quaternion<f64>>                        - component sum divided by weight
//   finalize(&self, renormalize: bool, reduce_average: bool) -> GrainOrientation - final orientation
// AccumulatorSet impl methods:
//   merge_partial(&mut self, partial: PartialAccumulators)       - spreads a sparse partial into the dense set

// ======================== ENGINE ========================
pub use grain_averaging::{
    GrainAveraging,       // struct - Initializing -> Accumulating -> Finalizing -> Done
    AveragingSummary,     // struct - counts, empty grains, optional per-voxel quaternions
    average_orientations, // fn(voxels, phases, num_grains, config) -> Result<(Vec<GrainOrientation>, AveragingSummary)>
};

// ======================== ANALYSIS ========================
pub use misorientation::orientation_spread; // fn(voxels, phases, grains) -> Result<Vec<f64>> - mean misorientation per grain
pub use synthetic::{synthetic_microstructure, SyntheticMicrostructure};
