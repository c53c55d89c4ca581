//! Route validity violations.

/// A way in which a route fails to be a valid closed tour.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// The route does not visit exactly `expected` locations.
    WrongLength {
        /// Locations in the route.
        len: usize,
        /// Locations in the matrix.
        expected: usize,
    },
    /// The route does not begin at the configured start.
    WrongStart {
        /// First location of the route, if any.
        found: Option<usize>,
        /// Configured start.
        expected: usize,
    },
    /// An index outside `0..n` appears in the route.
    UnknownLocation {
        /// Offending index.
        location: usize,
    },
    /// A location appears more than once.
    DuplicateLocation {
        /// Repeated location.
        location: usize,
    },
    /// A location is never visited.
    MissingLocation {
        /// Unvisited location.
        location: usize,
    },
    /// The reported distance disagrees with the recomputed closed-tour sum.
    DistanceMismatch {
        /// Distance stored on the route.
        reported: f64,
        /// Distance recomputed from the matrix.
        recomputed: f64,
    },
}

/// A validity violation found in a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::DuplicateLocation { location: 3 });
        assert_eq!(v.kind, ViolationType::DuplicateLocation { location: 3 });
        assert_ne!(v.kind, ViolationType::MissingLocation { location: 3 });
    }
}
