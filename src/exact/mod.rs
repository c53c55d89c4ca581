//! Exact tour search.
//!
//! - [`brute_force`] — Exhaustive permutation enumeration under a deadline, O((n−1)!·n)

mod brute_force;

pub use brute_force::{brute_force, route_count, ExactOutcome};
