use log::{debug, info};
use nalgebra::Quaternion;
use std::ops::Range;

use crate::averaging::grain_accumulator::{AccumulatorSet, GrainOrientation};
#[cfg(feature = "parallel")]
use crate::averaging::grain_accumulator::PartialAccumulators;
use crate::averaging::voxel_data::{PhaseTable, VoxelSource, VoxelView};
use crate::config::AveragingConfig;
use crate::interfaces::EngineState;
use crate::orientation::quaternion::euler_to_quaternion;
use crate::symmetries::crystal_symmetry::CrystalSymmetry;
use crate::Result;

/// Outcome of a successful pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AveragingSummary {
    /// Voxels in the input.
    pub num_voxels: usize,
    /// Voxels with a grain and an indexed phase.
    pub processed_voxels: usize,
    /// Background or unindexed voxels.
    pub skipped_voxels: usize,
    /// Grain ids 1..=num_grains were finalized.
    pub num_grains: usize,
    /// Grains without contributing voxels, reported as the identity orientation.
    pub empty_grains: Vec<usize>,
    /// Fundamental-zone quaternion per voxel (`None` for skipped voxels), when requested.
    pub voxel_quaternions: Option<Vec<Option<Quaternion<f64>>>>,
}

/// Averages per-voxel orientations into one orientation per grain.
///
/// A pass walks `Initializing -> Accumulating -> Finalizing -> Done`. Every precondition
/// is checked while initializing, so a failed pass leaves the grain array untouched.
#[derive(Debug, Clone)]
pub struct GrainAveraging {
    config: AveragingConfig,
    state: EngineState,
}

impl Default for GrainAveraging {
    fn default() -> Self {
        Self::new(AveragingConfig::default())
    }
}

impl GrainAveraging {
    pub fn new(config: AveragingConfig) -> Self {
        Self {
            config,
            state: EngineState::Initializing,
        }
    }

    pub fn config(&self) -> &AveragingConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Run one full pass.
    ///
    /// `grains` holds one slot per grain id (slot 0 is the background and is not
    /// written). On success every slot from 1 on carries its finalized orientation.
    pub fn run<S: VoxelSource + ?Sized>(
        &mut self,
        voxels: &S,
        phases: &PhaseTable,
        grains: &mut [GrainOrientation],
    ) -> Result<AveragingSummary> {
        self.state = EngineState::Initializing;
        self.config.validate()?;

        let view = VoxelView::resolve(voxels)?;
        let num_grains = grains.len();
        let processed_voxels = view.validate(phases, num_grains)?;
        debug!(
            "Validated {} voxels ({} active) against {} grain slots and {} phases",
            view.len(),
            processed_voxels,
            num_grains,
            phases.len()
        );

        self.advance(EngineState::Accumulating);
        let mut voxel_quaternions = self
            .config
            .store_voxel_quaternions
            .then(|| vec![None; view.len()]);
        let accumulators =
            self.accumulate(&view, phases, num_grains, voxel_quaternions.as_deref_mut());

        self.advance(EngineState::Finalizing);
        let mut empty_grains = Vec::new();
        for (grain_id, (slot, accumulator)) in grains
            .iter_mut()
            .zip(accumulators.iter())
            .enumerate()
            .skip(1)
        {
            if accumulator.is_empty() {
                debug!("Grain {} has no contributing voxels, using identity", grain_id);
                empty_grains.push(grain_id);
            }
            *slot = accumulator.finalize(self.config.renormalize, self.config.reduce_average);
        }
        if !empty_grains.is_empty() {
            info!(
                "{} of {} grains had no contributing voxels",
                empty_grains.len(),
                num_grains.saturating_sub(1)
            );
        }

        self.advance(EngineState::Done);
        info!(
            "Averaged orientations of {} grains from {} voxels",
            num_grains.saturating_sub(1),
            processed_voxels
        );

        Ok(AveragingSummary {
            num_voxels: view.len(),
            processed_voxels,
            skipped_voxels: view.len() - processed_voxels,
            num_grains: num_grains.saturating_sub(1),
            empty_grains,
            voxel_quaternions,
        })
    }

    fn advance(&mut self, next: EngineState) {
        debug_assert_eq!(self.state.next(), Some(next), "state skipped");
        debug!("{} -> {}", self.state.as_str(), next.as_str());
        self.state = next;
    }

    /// Accumulate every active voxel, writing its fundamental-zone quaternion into
    /// `reduced` (indexed by voxel) when given.
    fn accumulate(
        &self,
        view: &VoxelView<'_>,
        phases: &PhaseTable,
        num_grains: usize,
        reduced: Option<&mut [Option<Quaternion<f64>>]>,
    ) -> AccumulatorSet {
        if self.config.parallel {
            #[cfg(feature = "parallel")]
            {
                return accumulate_parallel(view, phases, num_grains, self.config.chunk_size, reduced);
            }
            #[cfg(not(feature = "parallel"))]
            {
                log::warn!(
                    "Parallel accumulation requested but parallel feature not enabled. Running sequentially."
                );
            }
        }

        let mut accumulators = AccumulatorSet::new(num_grains);
        visit_range(view, phases, 0..view.len(), reduced, |grain_id, symmetry, sample| {
            accumulators.add_sample(grain_id, symmetry, sample);
        });
        accumulators
    }
}

/// Grain id, symmetry and fundamental-zone quaternion of an active voxel.
fn reduced_sample(
    view: &VoxelView<'_>,
    phases: &PhaseTable,
    voxel: usize,
) -> Option<(usize, CrystalSymmetry, Quaternion<f64>)> {
    if !view.is_active(voxel) {
        return None;
    }
    // Validated before accumulation, every active voxel has a phase entry
    let symmetry = phases.symmetry(view.phases[voxel])?;
    let raw = euler_to_quaternion(&view.eulers[voxel]);
    Some((
        view.grain_ids[voxel],
        symmetry,
        symmetry.reduce_to_fundamental_zone(&raw),
    ))
}

/// Reduce each voxel of `voxels` once, hand active samples to `add` and record the
/// reduced quaternion in `reduced`, whose slot 0 is the first voxel of the range.
fn visit_range(
    view: &VoxelView<'_>,
    phases: &PhaseTable,
    voxels: Range<usize>,
    mut reduced: Option<&mut [Option<Quaternion<f64>>]>,
    mut add: impl FnMut(usize, CrystalSymmetry, &Quaternion<f64>),
) {
    for (offset, voxel) in voxels.enumerate() {
        let sample = reduced_sample(view, phases, voxel);
        if let Some(slots) = reduced.as_deref_mut() {
            slots[offset] = sample.map(|(_, _, q)| q);
        }
        if let Some((grain_id, symmetry, q)) = sample {
            add(grain_id, symmetry, &q);
        }
    }
}

#[cfg(feature = "parallel")]
fn accumulate_leaf(
    view: &VoxelView<'_>,
    phases: &PhaseTable,
    voxels: Range<usize>,
    reduced: Option<&mut [Option<Quaternion<f64>>]>,
) -> PartialAccumulators {
    let mut partial = PartialAccumulators::new();
    visit_range(view, phases, voxels, reduced, |grain_id, symmetry, sample| {
        partial.add_sample(grain_id, symmetry, sample);
    });
    partial
}

// Voxels are cut into chunks of `chunk_size`. Each chunk sums into a sparse partial that
// only holds the grains it touches; neighbouring partials are merged in voxel order
// with pairwise re-alignment, and the result is spread into one dense set at the end.
#[cfg(feature = "parallel")]
fn accumulate_parallel(
    view: &VoxelView<'_>,
    phases: &PhaseTable,
    num_grains: usize,
    chunk_size: usize,
    reduced: Option<&mut [Option<Quaternion<f64>>]>,
) -> AccumulatorSet {
    use rayon::prelude::*;

    let num_voxels = view.len();
    let num_chunks = num_voxels.div_ceil(chunk_size);
    debug!(
        "Accumulating {} voxels in {} chunks on {} threads",
        num_voxels,
        num_chunks,
        rayon::current_num_threads()
    );

    let chunk_range = |chunk: usize| {
        let start = chunk * chunk_size;
        start..(start + chunk_size).min(num_voxels)
    };
    let merge = |mut left: PartialAccumulators, right: PartialAccumulators| {
        left.merge(right);
        left
    };

    let merged = match reduced {
        Some(slots) => slots
            .par_chunks_mut(chunk_size)
            .enumerate()
            .map(|(chunk, slots)| accumulate_leaf(view, phases, chunk_range(chunk), Some(slots)))
            .reduce(PartialAccumulators::new, merge),
        None => (0..num_chunks)
            .into_par_iter()
            .map(|chunk| accumulate_leaf(view, phases, chunk_range(chunk), None))
            .reduce(PartialAccumulators::new, merge),
    };

    let mut accumulators = AccumulatorSet::new(num_grains);
    accumulators.merge_partial(merged);
    accumulators
}

/// Convenience wrapper: allocate `max grain id + 1` slots and run a pass.
pub fn average_orientations<S: VoxelSource + ?Sized>(
    voxels: &S,
    phases: &PhaseTable,
    num_grains: usize,
    config: AveragingConfig,
) -> Result<(Vec<GrainOrientation>, AveragingSummary)> {
    let mut grains = vec![GrainOrientation::default(); num_grains];
    let summary = GrainAveraging::new(config).run(voxels, phases, &mut grains)?;
    Ok((grains, summary))
}
