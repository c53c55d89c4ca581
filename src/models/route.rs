//! Closed route type.

/// A closed tour: every location visited once, then back to the first.
///
/// The return to the start is implicit and not stored in the order, but
/// it is included in [`Route::total_distance`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::Route;
///
/// let route = Route::new(vec![0, 2, 1], 12.5);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.start(), Some(0));
/// assert_eq!(route.order(), &[0, 2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    order: Vec<usize>,
    total_distance: f64,
}

impl Route {
    /// Creates a route from a visit order and its closed-tour distance.
    ///
    /// Use [`RouteEvaluator::build_route`](crate::evaluation::RouteEvaluator::build_route)
    /// to compute the distance from a matrix instead.
    pub fn new(order: Vec<usize>, total_distance: f64) -> Self {
        Self {
            order,
            total_distance,
        }
    }

    /// Location indices in visit order, starting with the start location.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the route, returning its visit order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// First location of the tour.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Number of locations visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the route visits nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of consecutive edges plus the closing edge back to the start.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new(Vec::new(), 0.0);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.start(), None);
        assert_eq!(r.total_distance(), 0.0);
    }

    #[test]
    fn test_route_accessors() {
        let r = Route::new(vec![0, 3, 1, 2], 42.0);
        assert_eq!(r.len(), 4);
        assert_eq!(r.start(), Some(0));
        assert_eq!(r.total_distance(), 42.0);
        assert_eq!(r.into_order(), vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_route_equality() {
        let a = Route::new(vec![0, 1], 4.0);
        let b = a.clone();
        assert_eq!(a, b);
    }
}
