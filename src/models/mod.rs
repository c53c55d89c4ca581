//! Domain model types for tour problems.
//!
//! Locations are the named sites a dataset describes; routes are the closed
//! tours the solvers produce over them, and violations describe how a route
//! can fail to be a tour.

mod location;
mod route;
mod violation;

pub use location::Location;
pub use route::Route;
pub use violation::{Violation, ViolationType};
