//! Seeded generator for emergency-site datasets.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::{dataset_file_name, Dataset};
use crate::error::Result;
use crate::models::Location;

/// Kinds of site a generated location can be.
pub const SITE_TYPES: [&str; 4] = [
    "Hospital",
    "Fire Station",
    "Emergency Shelter",
    "Police Station",
];

/// Side of the square grid coordinates are drawn from.
pub const GRID_SIZE: f64 = 100.0;

/// Sizes generated when none are requested.
pub const DEFAULT_SIZES: [usize; 6] = [5, 8, 10, 12, 15, 20];

/// Seed used when none is requested.
pub const DEFAULT_SEED: u64 = 42;

/// Generates `num_locations` random sites on a 100×100 grid.
///
/// Coordinates and distances are rounded to two decimals; the diagonal is
/// exactly zero. The same `(num_locations, seed)` always yields the same
/// dataset.
///
/// # Examples
///
/// ```
/// use u_tsp::dataset::generate_dataset;
///
/// let dataset = generate_dataset(5, 42);
/// assert_eq!(dataset.num_locations, 5);
/// assert_eq!(dataset.matrix().unwrap().size(), 5);
/// assert_eq!(dataset, generate_dataset(5, 42));
/// ```
pub fn generate_dataset(num_locations: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let locations: Vec<Location> = (0..num_locations)
        .map(|i| {
            let x = round2(rng.random_range(0.0..GRID_SIZE));
            let y = round2(rng.random_range(0.0..GRID_SIZE));
            let kind = SITE_TYPES.choose(&mut rng).copied().unwrap_or(SITE_TYPES[0]);
            Location::new(i, format!("{kind} {}", i + 1), x, y)
        })
        .collect();

    let distances = locations
        .iter()
        .map(|a| {
            locations
                .iter()
                .map(|b| {
                    if a.id() == b.id() {
                        0.0
                    } else {
                        round2(a.distance_to(b))
                    }
                })
                .collect()
        })
        .collect();

    Dataset {
        num_locations,
        locations,
        distances,
    }
}

/// Generates one dataset per size and writes each to `dir/sites_{size}.json`.
///
/// Creates `dir` if needed. Returns the written paths in `sizes` order.
pub fn write_datasets(dir: &Path, sizes: &[usize], seed: u64) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let path = dir.join(dataset_file_name(size));
        generate_dataset(size, seed).save(&path)?;
        info!(size, path = %path.display(), "dataset written");
        written.push(path);
    }
    Ok(written)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
