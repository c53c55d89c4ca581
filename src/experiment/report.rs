//! Fixed-width text reports for each experiment mode.
//!
//! Timed-out exact runs never print a distance: they show `TIMEOUT` or
//! `N/A` in every column that would need one.

use std::fmt;
use std::time::Duration;

use super::{ApproxTimingRow, ComparisonRow, ExactTimingRow};
use crate::exact::ExactOutcome;

const RULE_WIDTH: usize = 70;

/// Report for [`Experiment::verify_small_cases`](super::Experiment::verify_small_cases).
pub struct VerifyReport<'a>(pub &'a [ComparisonRow]);

/// Report for [`Experiment::time_exact_solver`](super::Experiment::time_exact_solver).
pub struct ExactTimingReport<'a> {
    /// Rows to print.
    pub rows: &'a [ExactTimingRow],
    /// Budget the exact solver ran with.
    pub timeout: Duration,
}

/// Report for [`Experiment::time_approximate_solver`](super::Experiment::time_approximate_solver).
pub struct ApproxTimingReport<'a>(pub &'a [ApproxTimingRow]);

/// Report for [`Experiment::compare_both`](super::Experiment::compare_both).
pub struct ComparisonReport<'a>(pub &'a [ComparisonRow]);

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

impl fmt::Display for VerifyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "TESTING: Small Cases (Verifying Correctness)")?;
        for row in self.0 {
            writeln!(f)?;
            writeln!(f, "Testing {} locations...", row.size)?;
            match row.exact.outcome.distance() {
                Some(distance) => writeln!(f, "  Brute Force: Distance = {distance:.2}")?,
                None => writeln!(f, "  Brute Force: TIMEOUT")?,
            }
            writeln!(
                f,
                "  Nearest Neighbor: Distance = {:.2}",
                row.approx.route.total_distance()
            )?;
            match row.quality_ratio() {
                Some(ratio) => writeln!(f, "  Approximation Quality: {ratio:.1}% of optimal")?,
                None => writeln!(f, "  Approximation Quality: N/A")?,
            }
            if row.violations.is_empty() {
                writeln!(f, "  Route Check: OK")?;
            } else {
                writeln!(f, "  Route Check: {} problem(s)", row.violations.len())?;
                for violation in &row.violations {
                    writeln!(f, "    {:?}", violation.kind)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for ExactTimingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "TIMING: Brute Force Algorithm")?;
        writeln!(f)?;
        writeln!(
            f,
            "WARNING: Larger sizes may take several minutes or timeout at {} seconds",
            self.timeout.as_secs()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<6} {:<15} {:<12} {:<12} Status",
            "Size", "Routes", "Time (s)", "Distance"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for row in self.rows {
            let (distance, status) = match &row.exact.outcome {
                ExactOutcome::Solved(route) => {
                    (format!("{:.2}", route.total_distance()), "Complete")
                }
                ExactOutcome::TimedOut { .. } => ("N/A".to_string(), "TIMEOUT"),
            };
            writeln!(
                f,
                "{:<6} {:<15} {:<12.3} {:<12} {}",
                row.size,
                group_thousands(row.route_count),
                row.exact.elapsed.as_secs_f64(),
                distance,
                status
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ApproxTimingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "TIMING: Nearest Neighbor Approximation")?;
        writeln!(f)?;
        writeln!(f, "{:<6} {:<12} {:<12}", "Size", "Time (s)", "Distance")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for row in self.0 {
            writeln!(
                f,
                "{:<6} {:<12.6} {:<12.2}",
                row.size,
                row.approx.elapsed.as_secs_f64(),
                row.approx.route.total_distance()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "COMPARISON: Brute Force vs Nearest Neighbor")?;
        writeln!(f)?;
        writeln!(
            f,
            "This compares both algorithms on datasets where brute force completes."
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<6} {:<12} {:<12} {:<14} {:<14} {:<12}",
            "Size", "Optimal", "Approx", "% of Optimal", "BF Time (s)", "NN Time (s)"
        )?;
        writeln!(f, "{}", "-".repeat(90))?;
        for row in self.0 {
            let approx = format!("{:.2}", row.approx.route.total_distance());
            let nn_time = format!("{:.6}", row.approx.elapsed.as_secs_f64());
            let (optimal, bf_time) = match row.exact.outcome.distance() {
                Some(distance) => (
                    format!("{distance:.2}"),
                    format!("{:.3}", row.exact.elapsed.as_secs_f64()),
                ),
                None => ("TIMEOUT".to_string(), "TIMEOUT".to_string()),
            };
            let ratio = row
                .quality_ratio()
                .map_or_else(|| "N/A".to_string(), |r| format!("{r:.1}%"));
            writeln!(
                f,
                "{:<6} {:<12} {:<12} {:<14} {:<14} {:<12}",
                row.size, optimal, approx, ratio, bf_time, nn_time
            )?;
        }

        let ratios: Vec<f64> = self.0.iter().filter_map(ComparisonRow::quality_ratio).collect();
        writeln!(f)?;
        if ratios.is_empty() {
            writeln!(f, "Average approximation quality: N/A")
        } else {
            let average = ratios.iter().sum::<f64>() / ratios.len() as f64;
            writeln!(f, "Average approximation quality: {average:.1}% of optimal")
        }
    }
}

/// Formats an integer with comma thousands separators.
///
/// ```
/// use u_tsp::experiment::report::group_thousands;
///
/// assert_eq!(group_thousands(362_880), "362,880");
/// assert_eq!(group_thousands(24), "24");
/// ```
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
