//! Fixed settings for experiment runs.

use std::time::Duration;

/// Wall-clock budget given to the exact solver in every mode.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sizes and limits each reporting mode runs with.
///
/// The binary always uses [`ExperimentConfig::default`]; tests shrink the
/// sizes and timeout.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default();
/// assert_eq!(config.start, 0);
/// assert_eq!(config.timeout, Duration::from_secs(60));
/// assert_eq!(config.exact_timing_sizes, vec![5, 8, 10, 12, 15]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Dispatch location every tour starts from.
    pub start: usize,
    /// Exact-solver time budget per call.
    pub timeout: Duration,
    /// Sizes checked by the correctness mode.
    pub verify_sizes: Vec<usize>,
    /// Sizes the exact solver is timed on.
    pub exact_timing_sizes: Vec<usize>,
    /// Sizes the approximate solver is timed on.
    pub approx_timing_sizes: Vec<usize>,
    /// Sizes compared side by side.
    pub comparison_sizes: Vec<usize>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            start: 0,
            timeout: DEFAULT_TIMEOUT,
            verify_sizes: vec![5, 8, 10],
            exact_timing_sizes: vec![5, 8, 10, 12, 15],
            approx_timing_sizes: vec![5, 8, 10, 12, 15, 20],
            comparison_sizes: vec![5, 8, 10],
        }
    }
}
