//! Distance matrices.
//!
//! Provides a dense, validated distance matrix for tour problems.

mod matrix;

pub use matrix::DistanceMatrix;
