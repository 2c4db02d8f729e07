use crate::averaging::grain_accumulator::GrainOrientation;
use crate::averaging::voxel_data::{PhaseTable, VoxelSource, VoxelView};
use crate::error::OrientationError;
use crate::orientation::quaternion::euler_to_quaternion;
use crate::Result;

/// Mean misorientation angle (radians) between each grain's voxels and the grain average.
///
/// Indexed like `grains`; slot 0 and grains without active voxels report 0. Uses the
/// same preconditions as an averaging pass.
pub fn orientation_spread<S: VoxelSource + ?Sized>(
    voxels: &S,
    phases: &PhaseTable,
    grains: &[GrainOrientation],
) -> Result<Vec<f64>> {
    let view = VoxelView::resolve(voxels)?;
    view.validate(phases, grains.len())?;

    let mut angle_sums = vec![0.0; grains.len()];
    let mut counts = vec![0usize; grains.len()];

    for voxel in 0..view.len() {
        if !view.is_active(voxel) {
            continue;
        }
        let phase_id = view.phases[voxel];
        let symmetry = phases
            .symmetry(phase_id)
            .ok_or(OrientationError::MissingPhase { voxel, phase_id })?;
        let grain_id = view.grain_ids[voxel];
        let sample = euler_to_quaternion(&view.eulers[voxel]);
        angle_sums[grain_id] +=
            symmetry.misorientation_angle(&grains[grain_id].average_quaternion, &sample);
        counts[grain_id] += 1;
    }

    Ok(angle_sums
        .iter()
        .zip(&counts)
        .map(|(&sum, &count)| if count == 0 { 0.0 } else { sum / count as f64 })
        .collect())
}
