//! Writes seeded emergency-site datasets for the experiment harness.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use u_tsp::dataset::{write_datasets, DEFAULT_SEED, DEFAULT_SIZES};
use u_tsp::logging::init_tracing;

/// Generate sites_{N}.json datasets of random sites on a 100x100 grid
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory the datasets are written to
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    output_dir: PathBuf,

    /// Dataset sizes to generate
    #[arg(long, value_delimiter = ',', value_name = "SIZES", default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Random seed; each size starts from the same seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(sizes = ?cli.sizes, seed = cli.seed, "generating datasets");

    println!("Generating emergency site datasets...");
    let written = write_datasets(&cli.output_dir, &cli.sizes, cli.seed)
        .with_context(|| format!("failed to write datasets to {}", cli.output_dir.display()))?;
    for (size, path) in cli.sizes.iter().zip(&written) {
        println!("  Created {} with {size} locations", path.display());
    }

    println!();
    println!("Dataset generation complete!");
    println!("Files created in '{}' directory", cli.output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["generate-sites"]).expect("defaults");
        assert_eq!(cli.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.output_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_sizes_list() {
        let cli = Cli::try_parse_from(["generate-sites", "--sizes", "3,4,7", "--seed", "9"])
            .expect("valid args");
        assert_eq!(cli.sizes, vec![3, 4, 7]);
        assert_eq!(cli.seed, 9);
    }
}
