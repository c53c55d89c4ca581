//! Experiment harness comparing the exact and approximate solvers.
//!
//! - [`Experiment`] — Runs the four reporting modes over a [`MatrixSource`](crate::dataset::MatrixSource)
//! - [`ExperimentConfig`] — Sizes, start location, and exact-solver timeout
//! - [`report`] — Text tables for each mode

mod config;
pub mod report;
mod runner;

pub use config::{ExperimentConfig, DEFAULT_TIMEOUT};
pub use runner::{
    quality_ratio, ApproxRun, ApproxTimingRow, ComparisonRow, ExactRun, ExactTimingRow,
    Experiment,
};
