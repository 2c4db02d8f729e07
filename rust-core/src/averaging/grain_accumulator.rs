use nalgebra::Quaternion;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::orientation::euler::EulerAngles;
use crate::orientation::quaternion::{normalize_or_identity, quaternion_to_euler};
use crate::symmetries::crystal_symmetry::CrystalSymmetry;

/// Finalized orientation of one grain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrainOrientation {
    /// Mean quaternion; the identity for grains without contributing voxels.
    pub average_quaternion: Quaternion<f64>,
    /// `average_quaternion` as Bunge Euler angles.
    pub average_euler: EulerAngles,
    /// Number of voxels that contributed.
    pub voxel_count: usize,
}

impl Default for GrainOrientation {
    fn default() -> Self {
        Self {
            average_quaternion: Quaternion::identity(),
            average_euler: EulerAngles::zero(),
            voxel_count: 0,
        }
    }
}

/// Running quaternion sum of one grain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrainAccumulator {
    weight_sum: f64,
    component_sum: Quaternion<f64>,
    symmetry: Option<CrystalSymmetry>,
}

impl Default for GrainAccumulator {
    fn default() -> Self {
        Self {
            weight_sum: 0.0,
            component_sum: Quaternion::new(0.0, 0.0, 0.0, 0.0),
            symmetry: None,
        }
    }
}

impl GrainAccumulator {
    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    pub fn component_sum(&self) -> &Quaternion<f64> {
        &self.component_sum
    }

    /// Symmetry of the first sample; used to align partial sums on merge.
    pub fn symmetry(&self) -> Option<CrystalSymmetry> {
        self.symmetry
    }

    pub fn is_empty(&self) -> bool {
        self.weight_sum == 0.0
    }

    /// Add a fundamental-zone sample, aligned onto the current sum.
    ///
    /// The first sample seeds the grain unmodified. Returns the aligned sample.
    pub fn add_sample(
        &mut self,
        symmetry: CrystalSymmetry,
        sample: &Quaternion<f64>,
    ) -> Quaternion<f64> {
        let aligned = if self.is_empty() {
            self.symmetry = Some(symmetry);
            *sample
        } else {
            symmetry.nearest_equivalent(&self.component_sum, sample)
        };

        self.weight_sum += 1.0;
        self.component_sum = self.component_sum + aligned;
        aligned
    }

    /// Fold another partial sum of the same grain into this one.
    ///
    /// The incoming sum is rotated onto the branch of this one first. Composition with a
    /// symmetry operator is linear, so aligning the whole sum is the same as aligning
    /// each of its samples by that operator.
    pub fn merge(&mut self, other: &GrainAccumulator) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }

        let aligned = match self.symmetry.or(other.symmetry) {
            Some(symmetry) => symmetry.nearest_equivalent(&self.component_sum, &other.component_sum),
            None => other.component_sum,
        };
        self.weight_sum += other.weight_sum;
        self.component_sum = self.component_sum + aligned;
    }

    /// Arithmetic mean of the aligned samples, `None` for an empty grain.
    pub fn mean(&self) -> Option<Quaternion<f64>> {
        if self.is_empty() {
            None
        } else {
            Some(self.component_sum / self.weight_sum)
        }
    }

    /// Mean orientation of the grain, the identity when no sample was added.
    pub fn finalize(&self, renormalize: bool, reduce_average: bool) -> GrainOrientation {
        match self.mean() {
            None => GrainOrientation::default(),
            Some(mean) => {
                let mut average_quaternion = if renormalize {
                    normalize_or_identity(&mean)
                } else {
                    mean
                };
                if let (true, Some(symmetry)) = (reduce_average, self.symmetry) {
                    average_quaternion = symmetry.reduce_to_fundamental_zone(&average_quaternion);
                }
                GrainOrientation {
                    average_quaternion,
                    average_euler: quaternion_to_euler(&average_quaternion),
                    voxel_count: self.weight_sum as usize,
                }
            }
        }
    }
}

/// One accumulator per grain slot, slot 0 unused.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatorSet {
    grains: Vec<GrainAccumulator>,
}

impl AccumulatorSet {
    pub fn new(num_grains: usize) -> Self {
        Self {
            grains: vec![GrainAccumulator::default(); num_grains],
        }
    }

    pub fn len(&self) -> usize {
        self.grains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grains.is_empty()
    }

    pub fn get(&self, grain_id: usize) -> Option<&GrainAccumulator> {
        self.grains.get(grain_id)
    }

    pub fn add_sample(
        &mut self,
        grain_id: usize,
        symmetry: CrystalSymmetry,
        sample: &Quaternion<f64>,
    ) -> Quaternion<f64> {
        self.grains[grain_id].add_sample(symmetry, sample)
    }

    /// Merge grain by grain. Both sets must cover the same grain slots.
    pub fn merge(&mut self, other: &AccumulatorSet) {
        for (mine, theirs) in self.grains.iter_mut().zip(&other.grains) {
            mine.merge(theirs);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrainAccumulator> {
        self.grains.iter()
    }

    /// Fold a sparse partial sum into the dense set, grain by grain.
    pub fn merge_partial(&mut self, partial: PartialAccumulators) {
        for (grain_id, accumulator) in partial.grains {
            self.grains[grain_id].merge(&accumulator);
        }
    }
}

/// Accumulators for only the grains a worker has seen.
///
/// A worker's share of the voxels usually touches a small fraction of the grains, so
/// partial sums are keyed by grain id instead of holding one slot per grain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialAccumulators {
    grains: HashMap<usize, GrainAccumulator>,
}

impl PartialAccumulators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of grains with at least one sample.
    pub fn len(&self) -> usize {
        self.grains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grains.is_empty()
    }

    pub fn get(&self, grain_id: usize) -> Option<&GrainAccumulator> {
        self.grains.get(&grain_id)
    }

    pub fn add_sample(
        &mut self,
        grain_id: usize,
        symmetry: CrystalSymmetry,
        sample: &Quaternion<f64>,
    ) -> Quaternion<f64> {
        self.grains
            .entry(grain_id)
            .or_default()
            .add_sample(symmetry, sample)
    }

    /// Merge `other`, which covers voxels after this one's, touching only its grains.
    pub fn merge(&mut self, other: PartialAccumulators) {
        for (grain_id, accumulator) in other.grains {
            self.grains.entry(grain_id).or_default().merge(&accumulator);
        }
    }
}
