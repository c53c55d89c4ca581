//! # u-tsp
//!
//! Closed-tour routing over small sets of sites, contrasting exhaustive
//! search with a greedy heuristic and measuring where exhaustive search hits
//! its factorial wall.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Route, Violation)
//! - [`distance`] — Validated distance matrix
//! - [`evaluation`] — Route distance and validity checking
//! - [`exact`] — Brute-force optimal tours under a deadline
//! - [`constructive`] — Nearest-neighbor heuristic
//! - [`dataset`] — JSON datasets, matrix sources, and the site generator
//! - [`experiment`] — Timing and quality harness with text reports
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use u_tsp::constructive::nearest_neighbor;
//! use u_tsp::dataset::generate_dataset;
//! use u_tsp::exact::brute_force;
//!
//! let dm = generate_dataset(6, 42).matrix().unwrap();
//! let optimal = brute_force(&dm, 0, Duration::from_secs(60)).unwrap();
//! let greedy = nearest_neighbor(&dm, 0).unwrap();
//! assert!(greedy.total_distance() >= optimal.distance().unwrap() - 1e-9);
//! ```

pub mod constructive;
pub mod dataset;
pub mod distance;
pub mod evaluation;
pub mod exact;
pub mod experiment;
pub mod logging;
pub mod models;

mod error;

pub use error::{Error, Result};
