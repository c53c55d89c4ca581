//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the start location, always travel
//! to the nearest unvisited location, then return to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.
//!
//! The tour is not guaranteed optimal; `compare-both` reports how far it
//! lands from the exhaustive optimum on each dataset.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Route;

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// Candidates are scanned in ascending index order and only a strictly
/// closer one replaces the incumbent, so the lowest index wins ties. Fails
/// only when `start` is not a location of the matrix.
///
/// # Arguments
///
/// * `distances` — Distance matrix
/// * `start` — Location the tour starts and ends at
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let locations = vec![
///     Location::new(0, "depot", 0.0, 0.0),
///     Location::new(1, "a", 1.0, 0.0),
///     Location::new(2, "b", 2.0, 0.0),
///     Location::new(3, "c", 3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
///
/// let route = nearest_neighbor(&dm, 0).unwrap();
/// assert_eq!(route.order(), &[0, 1, 2, 3]);
/// assert!((route.total_distance() - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Result<Route> {
    distances.check_start(start)?;
    let n = distances.size();

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;
    let mut total_distance = 0.0;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        total_distance += distances.get(current, next);
        unvisited.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    // Return to start
    total_distance += distances.get(current, start);

    debug!(
        locations = n,
        distance = total_distance,
        "nearest-neighbor tour built"
    );
    Ok(Route::new(order, total_distance))
}
