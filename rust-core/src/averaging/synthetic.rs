// Deterministic synthetic microstructures for demos, benchmarks and tests.

use nalgebra::Quaternion;
use std::f64::consts::PI;

use crate::averaging::voxel_data::{PhaseTable, VoxelDataset};
use crate::orientation::euler::EulerAngles;
use crate::orientation::quaternion::{euler_to_quaternion, quaternion_to_euler};
use crate::symmetries::crystal_symmetry::CrystalSymmetry;
use crate::symmetries::symmetry_operations::operator_quaternion;

// Low-discrepancy sequence increments (golden and plastic ratio conjugates)
const GOLDEN: f64 = 0.618_033_988_749_894_9;
const PLASTIC_1: f64 = 0.754_877_666_246_692_7;
const PLASTIC_2: f64 = 0.569_840_290_998_053_3;

/// Voxel arrays plus the orientation each grain was generated from.
#[derive(Debug, Clone)]
pub struct SyntheticMicrostructure {
    pub voxels: VoxelDataset,
    pub phases: PhaseTable,
    /// Fundamental-zone orientation per grain id, identity in slot 0.
    pub orientations: Vec<Quaternion<f64>>,
    pub symmetry: CrystalSymmetry,
}

impl SyntheticMicrostructure {
    /// Grain slots needed to average this dataset.
    pub fn num_grain_slots(&self) -> usize {
        self.orientations.len()
    }
}

/// Build `num_grains` single-phase grains of `voxels_per_grain` voxels each.
///
/// Every voxel is its grain's orientation perturbed by at most `max_noise` radians,
/// then composed with a symmetry operator and given a random sign, so that its raw Euler
/// angles look unrelated to its neighbours'. Voxels of different grains are interleaved
/// and each sweep adds one background and one unindexed voxel.
pub fn synthetic_microstructure(
    num_grains: usize,
    voxels_per_grain: usize,
    max_noise: f64,
    symmetry: CrystalSymmetry,
) -> SyntheticMicrostructure {
    let operators = symmetry.ops().operators();

    let mut orientations = vec![Quaternion::identity()];
    for grain_id in 1..=num_grains {
        let n = grain_id as f64;
        let euler = EulerAngles::new(
            2.0 * PI * fraction(n * PLASTIC_1),
            (1.0 - 2.0 * fraction(n * PLASTIC_2)).acos(),
            2.0 * PI * fraction(n * GOLDEN),
        );
        orientations.push(symmetry.reduce_to_fundamental_zone(&euler_to_quaternion(&euler)));
    }

    let mut voxels = VoxelDataset::with_capacity(voxels_per_grain * (num_grains + 2));
    for sweep in 0..voxels_per_grain {
        for grain_id in 1..=num_grains {
            let n = (sweep * num_grains + grain_id) as f64;
            let perturbation = small_rotation(max_noise * fraction(n * GOLDEN), n);
            let operator = operator_quaternion(&operators[(sweep * 7 + grain_id) % operators.len()]);

            let mut sample = orientations[grain_id] * perturbation * operator;
            if (sweep + grain_id) % 2 == 1 {
                sample = -sample;
            }
            voxels.push(grain_id, 1, quaternion_to_euler(&sample));
        }
        voxels.push(0, 1, EulerAngles::new(1.0, 1.0, 1.0));
        voxels.push(1, 0, EulerAngles::new(2.0, 0.5, 3.0));
    }

    SyntheticMicrostructure {
        voxels,
        phases: PhaseTable::from_symmetries([symmetry]),
        orientations,
        symmetry,
    }
}

fn small_rotation(angle: f64, n: f64) -> Quaternion<f64> {
    let theta = (1.0 - 2.0 * fraction(n * PLASTIC_1)).acos();
    let psi = 2.0 * PI * fraction(n * PLASTIC_2);
    let (s, c) = (0.5 * angle).sin_cos();
    Quaternion::new(
        c,
        s * theta.sin() * psi.cos(),
        s * theta.sin() * psi.sin(),
        s * theta.cos(),
    )
}

fn fraction(x: f64) -> f64 {
    x - x.floor()
}
