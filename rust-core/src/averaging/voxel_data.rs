use serde::{Deserialize, Serialize};

use crate::error::OrientationError;
use crate::orientation::euler::EulerAngles;
use crate::symmetries::crystal_symmetry::CrystalSymmetry;
use crate::Result;

/// Per-voxel arrays supplied by the surrounding data container.
///
/// An array the container does not hold is reported as `None`.
pub trait VoxelSource: Sync {
    /// Number of voxels every array is expected to cover.
    fn num_voxels(&self) -> usize;
    /// Grain id per voxel, 0 for unassigned voxels.
    fn grain_ids(&self) -> Option<&[usize]>;
    /// Phase id per voxel, 0 for unindexed voxels.
    fn phases(&self) -> Option<&[usize]>;
    /// Bunge Euler angles per voxel, radians.
    fn eulers(&self) -> Option<&[EulerAngles]>;
}

/// Owned voxel arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoxelDataset {
    pub grain_ids: Vec<usize>,
    pub phases: Vec<usize>,
    pub eulers: Vec<EulerAngles>,
}

impl VoxelDataset {
    pub fn new(grain_ids: Vec<usize>, phases: Vec<usize>, eulers: Vec<EulerAngles>) -> Self {
        Self {
            grain_ids,
            phases,
            eulers,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            grain_ids: Vec::with_capacity(capacity),
            phases: Vec::with_capacity(capacity),
            eulers: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, grain_id: usize, phase: usize, euler: EulerAngles) {
        self.grain_ids.push(grain_id);
        self.phases.push(phase);
        self.eulers.push(euler);
    }

    pub fn len(&self) -> usize {
        self.grain_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grain_ids.is_empty()
    }

    /// Largest grain id present, i.e. the grain array needs `max_grain_id() + 1` slots.
    pub fn max_grain_id(&self) -> usize {
        self.grain_ids.iter().copied().max().unwrap_or(0)
    }
}

impl VoxelSource for VoxelDataset {
    fn num_voxels(&self) -> usize {
        self.grain_ids.len()
    }

    fn grain_ids(&self) -> Option<&[usize]> {
        Some(&self.grain_ids)
    }

    fn phases(&self) -> Option<&[usize]> {
        Some(&self.phases)
    }

    fn eulers(&self) -> Option<&[EulerAngles]> {
        Some(&self.eulers)
    }
}

/// Crystal symmetry per phase id. Index 0 is the unindexed phase and normally empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTable {
    symmetries: Vec<Option<CrystalSymmetry>>,
}

impl PhaseTable {
    pub fn new(symmetries: Vec<Option<CrystalSymmetry>>) -> Self {
        Self { symmetries }
    }

    /// Table whose phases 1, 2, ... carry the given symmetries in order.
    pub fn from_symmetries<I>(symmetries: I) -> Self
    where
        I: IntoIterator<Item = CrystalSymmetry>,
    {
        let symmetries = std::iter::once(None)
            .chain(symmetries.into_iter().map(Some))
            .collect();
        Self { symmetries }
    }

    pub fn symmetry(&self, phase: usize) -> Option<CrystalSymmetry> {
        self.symmetries.get(phase).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.symmetries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symmetries.is_empty()
    }
}

/// Borrowed, length-checked view of a [`VoxelSource`].
#[derive(Debug, Clone, Copy)]
pub struct VoxelView<'a> {
    pub grain_ids: &'a [usize],
    pub phases: &'a [usize],
    pub eulers: &'a [EulerAngles],
}

impl<'a> VoxelView<'a> {
    /// Fetch every required array and check it covers all voxels.
    pub fn resolve<S: VoxelSource + ?Sized>(source: &'a S) -> Result<Self> {
        let expected = source.num_voxels();
        let grain_ids = source
            .grain_ids()
            .ok_or(OrientationError::MissingInput("grain_ids"))?;
        let phases = source
            .phases()
            .ok_or(OrientationError::MissingInput("phases"))?;
        let eulers = source
            .eulers()
            .ok_or(OrientationError::MissingInput("eulers"))?;

        check_length("grain_ids", expected, grain_ids.len())?;
        check_length("phases", expected, phases.len())?;
        check_length("eulers", expected, eulers.len())?;

        Ok(Self {
            grain_ids,
            phases,
            eulers,
        })
    }

    pub fn len(&self) -> usize {
        self.grain_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grain_ids.is_empty()
    }

    /// Voxels with an assigned grain and an indexed phase take part in averaging.
    pub fn is_active(&self, voxel: usize) -> bool {
        self.grain_ids[voxel] > 0 && self.phases[voxel] > 0
    }

    /// Check every active voxel against the grain count and the phase table.
    /// Returns the number of active voxels.
    pub fn validate(&self, phases: &PhaseTable, num_grains: usize) -> Result<usize> {
        let mut active = 0;
        for voxel in 0..self.len() {
            if !self.is_active(voxel) {
                continue;
            }
            let grain_id = self.grain_ids[voxel];
            if grain_id >= num_grains {
                return Err(OrientationError::GrainOutOfRange {
                    voxel,
                    grain_id,
                    num_grains,
                });
            }
            let phase_id = self.phases[voxel];
            if phases.symmetry(phase_id).is_none() {
                return Err(OrientationError::MissingPhase { voxel, phase_id });
            }
            active += 1;
        }
        Ok(active)
    }
}

fn check_length(array: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(OrientationError::LengthMismatch {
            array,
            expected,
            actual,
        });
    }
    Ok(())
}
