//! Exhaustive tour enumeration with a wall-clock deadline.
//!
//! # Algorithm
//!
//! Fix the start location and walk every permutation of the remaining
//! N−1 locations in lexicographic order. Each permutation `p` is scored as
//! the closed tour
//!
//! ```text
//! start → p[0] → p[1] → … → p[N-2] → start
//! ```
//!
//! and the strictly shortest one is kept, so the first minimum enumerated
//! wins ties. Fixing the start removes rotations of the same cycle; both
//! directions of each cycle are still examined.
//!
//! The deadline is polled before every candidate. Once it has passed the
//! search is abandoned and no route is reported.
//!
//! # Complexity
//!
//! O((N−1)!) candidates at O(N) each. Practical only up to roughly N = 12.

use std::iter;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Route;

/// What the exact solver produced within its time budget.
#[derive(Debug, Clone, PartialEq)]
pub enum ExactOutcome {
    /// The search finished; this is a minimum-distance tour.
    Solved(Route),
    /// The deadline passed before every candidate was examined.
    TimedOut {
        /// Candidates fully scored before giving up.
        routes_checked: u64,
        /// Time spent searching.
        elapsed: Duration,
    },
}

impl ExactOutcome {
    /// The optimal route, if the search finished.
    pub fn route(&self) -> Option<&Route> {
        match self {
            ExactOutcome::Solved(route) => Some(route),
            ExactOutcome::TimedOut { .. } => None,
        }
    }

    /// Consumes the outcome, returning the optimal route if there is one.
    pub fn into_route(self) -> Option<Route> {
        match self {
            ExactOutcome::Solved(route) => Some(route),
            ExactOutcome::TimedOut { .. } => None,
        }
    }

    /// The optimal distance, if the search finished.
    pub fn distance(&self) -> Option<f64> {
        self.route().map(Route::total_distance)
    }

    /// Returns `true` if the search ran out of time.
    pub fn is_timed_out(&self) -> bool {
        matches!(self, ExactOutcome::TimedOut { .. })
    }
}

/// Finds the minimum-distance closed tour from `start` by exhaustive search.
///
/// Returns [`ExactOutcome::TimedOut`] when `timeout` elapses first; a zero
/// timeout therefore never solves anything. Fails only when `start` is not a
/// location of the matrix.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::exact::brute_force;
///
/// // Four corners of a unit square; the perimeter is optimal.
/// let s = 2.0_f64.sqrt();
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, s, 1.0],
///     vec![1.0, 0.0, 1.0, s],
///     vec![s, 1.0, 0.0, 1.0],
///     vec![1.0, s, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// let outcome = brute_force(&dm, 0, Duration::from_secs(60)).unwrap();
/// let route = outcome.route().unwrap();
/// assert_eq!(route.order(), &[0, 1, 2, 3]);
/// assert!((route.total_distance() - 4.0).abs() < 1e-10);
/// ```
pub fn brute_force(
    distances: &DistanceMatrix,
    start: usize,
    timeout: Duration,
) -> Result<ExactOutcome> {
    distances.check_start(start)?;
    let n = distances.size();
    debug!(locations = n, start, ?timeout, "exact search started");

    let mut rest: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut best_rest = rest.clone();
    let mut best_distance = f64::INFINITY;
    let mut routes_checked: u64 = 0;
    let started = Instant::now();

    loop {
        let elapsed = started.elapsed();
        if elapsed >= timeout {
            warn!(
                locations = n,
                routes_checked,
                ?elapsed,
                "exact search timed out"
            );
            return Ok(ExactOutcome::TimedOut {
                routes_checked,
                elapsed,
            });
        }

        let distance = tour_distance(distances, start, &rest);
        if distance < best_distance {
            best_distance = distance;
            best_rest.copy_from_slice(&rest);
        }
        routes_checked += 1;

        if !next_permutation(&mut rest) {
            break;
        }
    }

    debug!(
        locations = n,
        routes_checked,
        distance = best_distance,
        "exact search finished"
    );
    let order = iter::once(start).chain(best_rest).collect();
    Ok(ExactOutcome::Solved(Route::new(order, best_distance)))
}

/// Number of distinct candidates the exact solver scores for `n` locations: (n−1)!.
///
/// Saturates at `u128::MAX` for very large `n`.
///
/// ```
/// use u_tsp::exact::route_count;
///
/// assert_eq!(route_count(1), 1);
/// assert_eq!(route_count(5), 24);
/// assert_eq!(route_count(15), 87_178_291_200);
/// ```
pub fn route_count(n: usize) -> u128 {
    (1..n as u128).fold(1u128, |acc, k| acc.saturating_mul(k))
}

fn tour_distance(distances: &DistanceMatrix, start: usize, rest: &[usize]) -> f64 {
    let mut total = 0.0;
    let mut prev = start;
    for &next in rest {
        total += distances.get(prev, next);
        prev = next;
    }
    total + distances.get(prev, start)
}

/// Advances `items` to its lexicographic successor.
///
/// Returns `false`, leaving `items` untouched, when it is already the last
/// permutation.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
