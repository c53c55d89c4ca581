//! Drives both solvers over configured sizes and records timings.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::ExperimentConfig;
use crate::constructive::nearest_neighbor;
use crate::dataset::MatrixSource;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::RouteEvaluator;
use crate::exact::{brute_force, route_count, ExactOutcome};
use crate::models::{Route, Violation};

/// Approximate distance as a percentage of the optimum.
///
/// `None` when the optimum is not positive, since the ratio is then
/// meaningless.
///
/// ```
/// use u_tsp::experiment::quality_ratio;
///
/// assert_eq!(quality_ratio(120.0, 100.0), Some(120.0));
/// assert_eq!(quality_ratio(0.0, 0.0), None);
/// ```
pub fn quality_ratio(approx: f64, optimal: f64) -> Option<f64> {
    (optimal > 0.0).then(|| approx / optimal * 100.0)
}

/// One timed call of the exact solver.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactRun {
    /// What the solver returned.
    pub outcome: ExactOutcome,
    /// Wall-clock time around the call.
    pub elapsed: Duration,
}

/// One timed call of the approximate solver.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproxRun {
    /// Tour the heuristic built.
    pub route: Route,
    /// Wall-clock time around the call.
    pub elapsed: Duration,
}

/// Both solvers on one size.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Number of locations.
    pub size: usize,
    /// Exact solver result.
    pub exact: ExactRun,
    /// Approximate solver result.
    pub approx: ApproxRun,
    /// Validity problems found in either route; empty when both are tours.
    pub violations: Vec<Violation>,
}

impl ComparisonRow {
    /// Approximate distance as a percentage of the optimum, if the exact
    /// solver finished.
    pub fn quality_ratio(&self) -> Option<f64> {
        let optimal = self.exact.outcome.distance()?;
        quality_ratio(self.approx.route.total_distance(), optimal)
    }
}

/// The exact solver timed on one size.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactTimingRow {
    /// Number of locations.
    pub size: usize,
    /// Candidate tours a complete search scores, (n−1)!.
    pub route_count: u128,
    /// Exact solver result.
    pub exact: ExactRun,
}

/// The approximate solver timed on one size.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproxTimingRow {
    /// Number of locations.
    pub size: usize,
    /// Approximate solver result.
    pub approx: ApproxRun,
}

/// Runs the four reporting modes against a matrix source.
///
/// Every mode loads all of its matrices before running anything, so a
/// missing dataset fails the call up front.
///
/// # Examples
///
/// ```
/// use u_tsp::dataset::{generate_dataset, InMemorySource};
/// use u_tsp::experiment::{Experiment, ExperimentConfig};
///
/// let source: InMemorySource = [4, 5]
///     .iter()
///     .map(|&n| generate_dataset(n, 42).matrix().unwrap())
///     .collect();
/// let config = ExperimentConfig {
///     comparison_sizes: vec![4, 5],
///     ..ExperimentConfig::default()
/// };
///
/// let rows = Experiment::with_config(source, config).compare_both().unwrap();
/// assert_eq!(rows.len(), 2);
/// assert!(rows.iter().all(|row| row.quality_ratio().unwrap() >= 100.0 - 1e-9));
/// ```
pub struct Experiment<S> {
    source: S,
    config: ExperimentConfig,
}

impl<S: MatrixSource> Experiment<S> {
    /// Creates an experiment with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, ExperimentConfig::default())
    }

    /// Creates an experiment with an explicit configuration.
    pub fn with_config(source: S, config: ExperimentConfig) -> Self {
        Self { source, config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs both solvers on the small sizes and checks each route is a valid tour.
    pub fn verify_small_cases(&self) -> Result<Vec<ComparisonRow>> {
        info!(sizes = ?self.config.verify_sizes, "verifying small cases");
        self.compare(&self.config.verify_sizes)
    }

    /// Times the exact solver on increasing sizes.
    pub fn time_exact_solver(&self) -> Result<Vec<ExactTimingRow>> {
        info!(sizes = ?self.config.exact_timing_sizes, "timing exact solver");
        self.load(&self.config.exact_timing_sizes)?
            .into_iter()
            .map(|(size, matrix)| -> Result<ExactTimingRow> {
                Ok(ExactTimingRow {
                    size,
                    route_count: route_count(size),
                    exact: self.run_exact(&matrix)?,
                })
            })
            .collect()
    }

    /// Times the approximate solver on increasing sizes.
    pub fn time_approximate_solver(&self) -> Result<Vec<ApproxTimingRow>> {
        info!(sizes = ?self.config.approx_timing_sizes, "timing approximate solver");
        self.load(&self.config.approx_timing_sizes)?
            .into_iter()
            .map(|(size, matrix)| -> Result<ApproxTimingRow> {
                Ok(ApproxTimingRow {
                    size,
                    approx: self.run_approx(&matrix)?,
                })
            })
            .collect()
    }

    /// Runs both solvers side by side.
    pub fn compare_both(&self) -> Result<Vec<ComparisonRow>> {
        info!(sizes = ?self.config.comparison_sizes, "comparing solvers");
        self.compare(&self.config.comparison_sizes)
    }

    fn compare(&self, sizes: &[usize]) -> Result<Vec<ComparisonRow>> {
        self.load(sizes)?
            .into_iter()
            .map(|(size, matrix)| -> Result<ComparisonRow> {
                let exact = self.run_exact(&matrix)?;
                let approx = self.run_approx(&matrix)?;

                let evaluator = RouteEvaluator::new(&matrix);
                let mut violations = evaluator.violations(&approx.route, self.config.start);
                if let Some(route) = exact.outcome.route() {
                    violations.extend(evaluator.violations(route, self.config.start));
                }

                Ok(ComparisonRow {
                    size,
                    exact,
                    approx,
                    violations,
                })
            })
            .collect()
    }

    fn load(&self, sizes: &[usize]) -> Result<Vec<(usize, DistanceMatrix)>> {
        sizes
            .iter()
            .map(|&size| self.source.matrix(size).map(|matrix| (size, matrix)))
            .collect()
    }

    fn run_exact(&self, matrix: &DistanceMatrix) -> Result<ExactRun> {
        let started = Instant::now();
        let outcome = brute_force(matrix, self.config.start, self.config.timeout)?;
        let elapsed = started.elapsed();
        debug!(size = matrix.size(), ?elapsed, "exact run");
        Ok(ExactRun { outcome, elapsed })
    }

    fn run_approx(&self, matrix: &DistanceMatrix) -> Result<ApproxRun> {
        let started = Instant::now();
        let route = nearest_neighbor(matrix, self.config.start)?;
        let elapsed = started.elapsed();
        debug!(size = matrix.size(), ?elapsed, "approximate run");
        Ok(ApproxRun { route, elapsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{generate_dataset, InMemorySource};
    use crate::error::Error;

    fn source(sizes: &[usize]) -> InMemorySource {
        sizes
            .iter()
            .map(|&n| generate_dataset(n, 42).matrix().expect("valid"))
            .collect()
    }

    fn small_config() -> ExperimentConfig {
        ExperimentConfig {
            verify_sizes: vec![3, 5],
            exact_timing_sizes: vec![3, 6],
            approx_timing_sizes: vec![3, 6, 9],
            comparison_sizes: vec![5, 6],
            ..ExperimentConfig::default()
        }
    }

    #[test]
    fn test_quality_ratio() {
        assert_eq!(quality_ratio(150.0, 100.0), Some(150.0));
        assert_eq!(quality_ratio(1.0, 0.0), None);
    }

    #[test]
    fn test_verify_small_cases() {
        let exp = Experiment::with_config(source(&[3, 5]), small_config());
        let rows = exp.verify_small_cases().expect("datasets present");
        assert_eq!(rows.iter().map(|r| r.size).collect::<Vec<_>>(), vec![3, 5]);
        for row in &rows {
            assert!(row.violations.is_empty(), "{:?}", row.violations);
            assert!(row.quality_ratio().expect("solved") >= 100.0 - 1e-9);
        }
    }

    #[test]
    fn test_time_exact_solver() {
        let exp = Experiment::with_config(source(&[3, 6]), small_config());
        let rows = exp.time_exact_solver().expect("datasets present");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].route_count, 2);
        assert_eq!(rows[1].route_count, 120);
        assert!(rows.iter().all(|r| !r.exact.outcome.is_timed_out()));
    }

    #[test]
    fn test_time_exact_solver_timeout() {
        let config = ExperimentConfig {
            timeout: Duration::ZERO,
            ..small_config()
        };
        let exp = Experiment::with_config(source(&[3, 6]), config);
        let rows = exp.time_exact_solver().expect("datasets present");
        assert!(rows.iter().all(|r| r.exact.outcome.is_timed_out()));
    }

    #[test]
    fn test_time_approximate_solver() {
        let exp = Experiment::with_config(source(&[3, 6, 9]), small_config());
        let rows = exp.time_approximate_solver().expect("datasets present");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].approx.route.len(), 9);
    }

    #[test]
    fn test_compare_both_timeout_has_no_ratio() {
        let config = ExperimentConfig {
            timeout: Duration::ZERO,
            ..small_config()
        };
        let exp = Experiment::with_config(source(&[5, 6]), config);
        let rows = exp.compare_both().expect("datasets present");
        for row in &rows {
            assert!(row.exact.outcome.is_timed_out());
            assert_eq!(row.quality_ratio(), None);
            assert!(row.violations.is_empty());
        }
    }

    #[test]
    fn test_missing_dataset_fails_before_running() {
        let exp = Experiment::with_config(source(&[3]), small_config());
        let err = exp.verify_small_cases().expect_err("size 5 missing");
        assert!(matches!(err, Error::DatasetNotFound { size: 5, .. }));
    }

    #[test]
    fn test_start_out_of_range() {
        let config = ExperimentConfig {
            start: 10,
            ..small_config()
        };
        let exp = Experiment::with_config(source(&[3, 6, 9]), config);
        assert!(matches!(
            exp.time_approximate_solver(),
            Err(Error::StartOutOfRange { start: 10, size: 3 })
        ));
    }
}
