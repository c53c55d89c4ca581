//! Command line harness timing the exact and approximate tour solvers.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::{debug, info};

use u_tsp::dataset::DirectorySource;
use u_tsp::experiment::report::{
    ApproxTimingReport, ComparisonReport, ExactTimingReport, VerifyReport,
};
use u_tsp::experiment::Experiment;
use u_tsp::logging::init_tracing;

#[derive(Parser)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Run the modes in order: verify-small-cases, time-exact-solver, \
                  time-approximate-solver, compare-both.\n\
                  Datasets are created with `generate-sites`."
)]
struct Cli {
    /// Experiment to run
    #[arg(value_enum)]
    mode: Option<Mode>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory holding sites_{N}.json datasets
    #[arg(long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Check both solvers on small inputs
    VerifySmallCases,
    /// Time the exact solver on increasing sizes
    TimeExactSolver,
    /// Time the nearest-neighbor heuristic on increasing sizes
    TimeApproximateSolver,
    /// Compare both solvers side by side
    CompareBoth,
    /// Show this help message
    Help,
}

fn main() -> ExitCode {
    execute(
        std::env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Parses `args`, runs the chosen mode, and returns the process exit code.
///
/// Reports and usage go to `out`; errors and hints go to `err`.
fn execute<I, T>(args: I, out: &mut impl Write, err: &mut impl Write) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_err) => {
            // Unknown modes print usage but are not failures.
            if let Err(io_err) = report_parse_error(&parse_err, out, err) {
                eprintln!("failed to print usage: {io_err}");
            }
            return ExitCode::SUCCESS;
        }
    };

    init_tracing(cli.verbose);
    debug!("Verbose level: {}", cli.verbose);

    let mode = match cli.mode {
        None | Some(Mode::Help) => {
            if let Err(io_err) = print_usage(out) {
                eprintln!("failed to print usage: {io_err}");
            }
            return ExitCode::SUCCESS;
        }
        Some(mode) => mode,
    };

    match run(mode, &cli.data_dir, out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(run_err) => {
            if let Err(io_err) = report_failure(&run_err, &cli.data_dir, err) {
                eprintln!("failed to report error: {io_err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(mode: Mode, data_dir: &Path, out: &mut impl Write) -> Result<()> {
    info!(?mode, data_dir = %data_dir.display(), "starting experiment");
    let experiment = Experiment::new(DirectorySource::new(data_dir));

    match mode {
        Mode::VerifySmallCases => {
            let rows = experiment.verify_small_cases()?;
            writeln!(out, "{}", VerifyReport(&rows))?;
        }
        Mode::TimeExactSolver => {
            let rows = experiment.time_exact_solver()?;
            let timeout = experiment.config().timeout;
            writeln!(out, "{}", ExactTimingReport { rows: &rows, timeout })?;
        }
        Mode::TimeApproximateSolver => {
            let rows = experiment.time_approximate_solver()?;
            writeln!(out, "{}", ApproxTimingReport(&rows))?;
        }
        Mode::CompareBoth => {
            let rows = experiment.compare_both()?;
            writeln!(out, "{}", ComparisonReport(&rows))?;
        }
        Mode::Help => print_usage(out)?,
    }
    Ok(())
}

fn report_parse_error(
    parse_err: &clap::Error,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match parse_err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            write!(out, "{}", parse_err.render())
        }
        _ => {
            write!(err, "{}", parse_err.render())?;
            writeln!(out)?;
            print_usage(out)
        }
    }
}

fn report_failure(
    run_err: &anyhow::Error,
    data_dir: &Path,
    err: &mut impl Write,
) -> io::Result<()> {
    writeln!(err, "Error: {run_err:#}")?;
    let missing = run_err
        .downcast_ref::<u_tsp::Error>()
        .is_some_and(u_tsp::Error::is_missing_data);
    if missing {
        writeln!(
            err,
            "Please run: generate-sites --output-dir {}",
            data_dir.display()
        )?;
        writeln!(err, "This will create the required test datasets.")?;
    }
    Ok(())
}

fn print_usage(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", Cli::command().render_long_help())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_modes() {
        let cli = Cli::try_parse_from(["tsp-experiment", "compare-both"]).expect("valid mode");
        assert!(matches!(cli.mode, Some(Mode::CompareBoth)));
        assert_eq!(cli.data_dir, PathBuf::from("data"));

        let cli = Cli::try_parse_from(["tsp-experiment", "time-approximate-solver", "-vv"])
            .expect("valid mode");
        assert!(matches!(cli.mode, Some(Mode::TimeApproximateSolver)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_missing_mode_is_accepted() {
        let cli = Cli::try_parse_from(["tsp-experiment"]).expect("mode is optional");
        assert!(cli.mode.is_none());
    }

    fn execute_args(args: &[&str]) -> (ExitCode, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).expect("utf-8 output"),
            String::from_utf8(err).expect("utf-8 errors"),
        )
    }

    #[test]
    fn test_unknown_mode_rejected_by_parser() {
        assert!(Cli::try_parse_from(["tsp-experiment", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["tsp-experiment", "bogus"]).is_err());
    }

    #[test]
    fn test_unknown_mode_prints_error_and_usage() {
        let (code, out, err) = execute_args(&["tsp-experiment", "bogus"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(err.contains("bogus"));
        assert!(out.contains("Usage"));
        assert!(out.contains("verify-small-cases"));
    }

    #[test]
    fn test_unknown_flag_prints_usage() {
        let (code, out, _) = execute_args(&["tsp-experiment", "--bogus"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("Usage"));
    }

    #[test]
    fn test_no_mode_prints_usage() {
        for args in [&["tsp-experiment"][..], &["tsp-experiment", "help"][..]] {
            let (code, out, err) = execute_args(args);
            assert_eq!(code, ExitCode::SUCCESS);
            assert!(out.contains("Usage"));
            assert!(err.is_empty());
        }
    }

    #[test]
    fn test_help_flag_goes_to_stdout() {
        let (code, out, err) = execute_args(&["tsp-experiment", "--help"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("Usage"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_missing_data_fails() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let err = run(Mode::TimeApproximateSolver, dir.path(), &mut Vec::<u8>::new())
            .expect_err("no datasets");
        assert!(err
            .downcast_ref::<u_tsp::Error>()
            .is_some_and(u_tsp::Error::is_missing_data));
    }

    #[test]
    fn test_missing_data_prints_hint_and_exits_nonzero() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let data_dir = dir.path().to_str().expect("utf-8 path");
        let (code, out, err) =
            execute_args(&["tsp-experiment", "compare-both", "--data-dir", data_dir]);
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        assert!(err.contains("Please run: generate-sites --output-dir"));
    }

    #[test]
    fn test_report_written_to_out() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        u_tsp::dataset::write_datasets(dir.path(), &[5, 8, 10, 12, 15, 20], 42)
            .expect("datasets written");
        let mut out = Vec::new();
        run(Mode::TimeApproximateSolver, dir.path(), &mut out).expect("datasets present");
        let report = String::from_utf8(out).expect("utf-8 output");
        assert!(report.contains("TIMING: Nearest Neighbor Approximation"));
        assert_eq!(report.lines().filter(|line| line.starts_with("20 ")).count(), 1);
    }
}
