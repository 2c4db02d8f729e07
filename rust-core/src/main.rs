use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};

use grain_orientations::averaging::{
    average_orientations, orientation_spread, synthetic_microstructure,
};
use grain_orientations::config::AveragingConfig;
use grain_orientations::symmetries::CrystalSymmetry;

#[derive(Parser)]
#[command(name = "grain-orientations")]
#[command(about = "Symmetry-aware average orientations for grains in voxelized microstructures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Average a generated microstructure and compare against the generating orientations
    Demo {
        /// Number of grains
        #[arg(short, long, default_value = "10")]
        grains: usize,

        /// Voxels per grain
        #[arg(long, default_value = "1000")]
        voxels_per_grain: usize,

        /// Maximum per-voxel deviation in degrees
        #[arg(short, long, default_value = "5.0")]
        noise: f64,

        /// Crystal symmetry (name or point group, e.g. cubic, 622)
        #[arg(short, long, default_value = "cubic")]
        symmetry: CrystalSymmetry,

        /// Run the accumulation pass on a single thread
        #[arg(long)]
        sequential: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting grain-orientations v{}", grain_orientations::VERSION);

    match cli.command {
        Commands::Demo {
            grains,
            voxels_per_grain,
            noise,
            symmetry,
            sequential,
        } => run_demo(grains, voxels_per_grain, noise, symmetry, sequential),
    }
}

fn run_demo(
    grains: usize,
    voxels_per_grain: usize,
    noise_degrees: f64,
    symmetry: CrystalSymmetry,
    sequential: bool,
) -> anyhow::Result<()> {
    if noise_degrees >= 30.0 {
        warn!(
            "Noise of {} degrees approaches the {} fundamental zone; averages may be meaningless",
            noise_degrees, symmetry
        );
    }

    info!(
        "Generating {} {} grains with {} voxels each",
        grains, symmetry, voxels_per_grain
    );
    let synthetic =
        synthetic_microstructure(grains, voxels_per_grain, noise_degrees.to_radians(), symmetry);

    let config = AveragingConfig {
        parallel: !sequential,
        ..AveragingConfig::default()
    };
    let (results, summary) = average_orientations(
        &synthetic.voxels,
        &synthetic.phases,
        synthetic.num_grain_slots(),
        config,
    )?;
    let spread = orientation_spread(&synthetic.voxels, &synthetic.phases, &results)?;

    println!(
        "{:>6} {:>8} {:>9} {:>9} {:>9} {:>10} {:>10}",
        "grain", "voxels", "phi1", "Phi", "phi2", "error", "spread"
    );
    for (grain_id, result) in results.iter().enumerate().skip(1) {
        let [phi1, phi, phi2] = result.average_euler.to_degrees();
        let error = symmetry.misorientation_angle(
            &result.average_quaternion,
            &synthetic.orientations[grain_id],
        );
        println!(
            "{:>6} {:>8} {:>9.3} {:>9.3} {:>9.3} {:>10.4} {:>10.4}",
            grain_id,
            result.voxel_count,
            phi1,
            phi,
            phi2,
            error.to_degrees(),
            spread[grain_id].to_degrees()
        );
    }

    info!(
        "Processed {} of {} voxels ({} skipped), {} empty grains",
        summary.processed_voxels,
        summary.num_voxels,
        summary.skipped_voxels,
        summary.empty_grains.len()
    );
    Ok(())
}
