//! Route evaluator that computes closed-tour distance and validity.

use crate::distance::DistanceMatrix;
use crate::models::{Route, Violation, ViolationType};

/// Tolerance used when comparing a reported distance with a recomputed one.
const DISTANCE_TOLERANCE: f64 = 1e-9;

/// Builds routes from visit orders and checks that a route is a valid tour.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::RouteEvaluator;
///
/// let locations = vec![
///     Location::new(0, "depot", 0.0, 0.0),
///     Location::new(1, "a", 3.0, 4.0),
///     Location::new(2, "b", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
///
/// let evaluator = RouteEvaluator::new(&dm);
/// let route = evaluator.build_route(vec![0, 1, 2]);
/// assert!((route.total_distance() - 20.0).abs() < 1e-10);
/// assert!(evaluator.violations(&route, 0).is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator over the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Builds a route from a visit order, computing its closed-tour distance.
    pub fn build_route(&self, order: Vec<usize>) -> Route {
        let distance = self.distances.closed_distance(&order);
        Route::new(order, distance)
    }

    /// Checks that `route` visits every location exactly once, begins at
    /// `start`, and reports the distance the matrix gives for its order.
    ///
    /// A valid route has an empty violations list.
    pub fn violations(&self, route: &Route, start: usize) -> Vec<Violation> {
        let n = self.distances.size();
        let mut violations = Vec::new();

        if route.len() != n {
            violations.push(Violation::new(ViolationType::WrongLength {
                len: route.len(),
                expected: n,
            }));
        }

        if route.start() != Some(start) {
            violations.push(Violation::new(ViolationType::WrongStart {
                found: route.start(),
                expected: start,
            }));
        }

        let mut seen = vec![false; n];
        let mut in_range = true;
        for &location in route.order() {
            match seen.get_mut(location) {
                None => {
                    in_range = false;
                    violations.push(Violation::new(ViolationType::UnknownLocation { location }));
                }
                Some(true) => {
                    violations.push(Violation::new(ViolationType::DuplicateLocation { location }));
                }
                Some(slot) => *slot = true,
            }
        }
        for (location, _) in seen.iter().enumerate().filter(|&(_, &visited)| !visited) {
            violations.push(Violation::new(ViolationType::MissingLocation { location }));
        }

        // Out-of-range indices would panic inside the matrix lookup.
        if in_range {
            let recomputed = self.distances.closed_distance(route.order());
            let reported = route.total_distance();
            if (recomputed - reported).abs() > DISTANCE_TOLERANCE * recomputed.max(1.0) {
                violations.push(Violation::new(ViolationType::DistanceMismatch {
                    reported,
                    recomputed,
                }));
            }
        }

        violations
    }

    /// Returns `true` if `route` has no violations.
    pub fn is_valid(&self, route: &Route, start: usize) -> bool {
        self.violations(route, start).is_empty()
    }
}
