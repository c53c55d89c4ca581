//! Datasets of sites and the sources the harness loads matrices from.
//!
//! - [`Dataset`] — JSON record: locations plus their distance matrix
//! - [`MatrixSource`] — Size-keyed matrix lookup ([`DirectorySource`], [`InMemorySource`])
//! - [`generate_dataset`] — Seeded random sites on a 100×100 grid

mod generator;
mod record;
mod source;

pub use generator::{
    generate_dataset, write_datasets, DEFAULT_SEED, DEFAULT_SIZES, GRID_SIZE, SITE_TYPES,
};
pub use record::Dataset;
pub use source::{dataset_file_name, DirectorySource, InMemorySource, MatrixSource};
