//! Route distance and validity checking.

mod evaluator;

pub use evaluator::RouteEvaluator;
