//! Location type.

use serde::{Deserialize, Serialize};

/// A named site on the plane.
///
/// Location 0 is conventionally the dispatch center every tour starts from.
/// Solvers never look at coordinates; they only read the distance matrix
/// built from them.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
///
/// let depot = Location::new(0, "Hospital 1", 35.0, 35.0);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.name(), "Hospital 1");
///
/// let other = Location::new(1, "Fire Station 2", 38.0, 39.0);
/// assert!((depot.distance_to(&other) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    name: String,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: usize, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
        }
    }

    /// Location ID (0 = dispatch center).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let l = Location::new(3, "Police Station 4", 10.0, 20.0);
        assert_eq!(l.id(), 3);
        assert_eq!(l.name(), "Police Station 4");
        assert_eq!(l.x(), 10.0);
        assert_eq!(l.y(), 20.0);
    }

    #[test]
    fn test_location_distance() {
        let a = Location::new(0, "a", 0.0, 0.0);
        let b = Location::new(1, "b", 3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_location_deserialize() {
        let json = r#"{"id": 2, "name": "Emergency Shelter 3", "x": 12.5, "y": 99.01}"#;
        let l: Location = serde_json::from_str(json).expect("valid json");
        assert_eq!(l, Location::new(2, "Emergency Shelter 3", 12.5, 99.01));
    }
}
