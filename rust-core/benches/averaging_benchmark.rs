use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grain_orientations::averaging::{average_orientations, synthetic_microstructure};
use grain_orientations::config::AveragingConfig;
use grain_orientations::orientation::{euler_to_quaternion, EulerAngles};
use grain_orientations::symmetries::CrystalSymmetry;
use std::hint::black_box;

/// Per-voxel kernels: fundamental-zone reduction and nearest-equivalent search.
fn bench_orientation_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation_ops");
    let q = euler_to_quaternion(&EulerAngles::new(2.2, 1.3, 4.4));
    let reference = euler_to_quaternion(&EulerAngles::new(2.25, 1.28, 4.41));

    for symmetry in [
        CrystalSymmetry::Cubic,
        CrystalSymmetry::Hexagonal,
        CrystalSymmetry::Orthorhombic,
    ] {
        group.bench_with_input(
            BenchmarkId::new("reduce_to_fundamental_zone", symmetry),
            &symmetry,
            |b, sym| b.iter(|| sym.reduce_to_fundamental_zone(black_box(&q))),
        );
        group.bench_with_input(
            BenchmarkId::new("nearest_equivalent", symmetry),
            &symmetry,
            |b, sym| b.iter(|| sym.nearest_equivalent(black_box(&reference), black_box(&q))),
        );
    }

    group.finish();
}

/// Full pass, sequential against parallel accumulation.
fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pass");
    group.sample_size(20);

    // Few large grains, then many grains of a handful of voxels each
    for (grains, voxels_per_grain) in [(100, 2_000), (50_000, 4)] {
        let synthetic =
            synthetic_microstructure(grains, voxels_per_grain, 5f64.to_radians(), CrystalSymmetry::Cubic);
        let slots = synthetic.num_grain_slots();

        for (label, config) in [
            ("sequential", AveragingConfig::sequential()),
            ("parallel", AveragingConfig::default()),
        ] {
            group.bench_with_input(BenchmarkId::new(label, grains), &config, |b, config| {
                b.iter(|| {
                    average_orientations(
                        black_box(&synthetic.voxels),
                        &synthetic.phases,
                        slots,
                        config.clone(),
                    )
                });
            });
        }
    }

    group.finish();
}

criterion_group!(averaging_benches, bench_orientation_ops, bench_full_pass);
criterion_main!(averaging_benches);
