use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{value_parser, Parser, Subcommand};

use clusterbench::{
    dataset, render_strip, sample_blobs, write_blobs, BlobConfig, ClusteringRun, Variant,
    DEFAULT_CENTERS,
};

/// Synthetic 1-D clustering benchmark harness: generate datasets with known
/// ground truth, then render side-by-side strip plots against the output of
/// the algorithm under test.
#[derive(Parser)]
#[command(name = "clusterbench")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic dataset with ground-truth labels and centroids
    Gen {
        /// Number of values to generate
        #[arg(short, value_parser = value_parser!(u64).range(1..))]
        n: u64,

        /// Number of centroids
        #[arg(short, value_parser = value_parser!(u64).range(1..))]
        k: Option<u64>,

        /// Directory to which the output must be produced
        #[arg(short)]
        output: PathBuf,

        /// Also write a .gitignore that excludes everything in the output directory
        #[arg(short)]
        gitignore: bool,

        /// RNG seed; drawn from OS entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render strip plots comparing ground truth against the algorithm under test
    Plot {
        /// Directory containing the outputs of gen and of the external algorithm
        #[arg(short)]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gen {
            n,
            k,
            output,
            gitignore,
            seed,
        } => gen(n as usize, k.map(|k| k as usize), &output, gitignore, seed),
        Commands::Plot { dir } => plot(&dir),
    }
}

fn gen(
    n: usize,
    k: Option<usize>,
    output: &Path,
    gitignore: bool,
    seed: Option<u64>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let cfg = BlobConfig::new(n).centers(k);

    println!(
        "Generating {} samples in {} blobs (seed {})",
        n,
        k.unwrap_or(DEFAULT_CENTERS),
        seed
    );
    let blobs = sample_blobs(&cfg, seed);

    write_blobs(output, &blobs, gitignore, |path| {
        println!("Writing {}", path.display());
    })?;

    Ok(())
}

fn plot(dir: &Path) -> Result<()> {
    for variant in [Variant::UnderTest, Variant::GroundTruth] {
        println!("Reading {}", dir.join(dataset::VALUES).display());
        println!("Reading {}", dir.join(variant.memberships_file()).display());
        println!("Reading {}", dir.join(variant.centroids_file()).display());
        let run = ClusteringRun::load(dir, variant)?;

        let out = dir.join(variant.plot_file());
        println!("Writing {}", out.display());
        render_strip(&run, &out)?;
    }

    Ok(())
}
