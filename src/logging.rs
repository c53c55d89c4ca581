//! Tracing setup shared by the binaries.

use tracing::Level;

/// Maps a `-v` count to the most verbose level that is emitted.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr `fmt` subscriber so reports on stdout stay clean.
///
/// Keeps the existing subscriber if a global one is already set.
pub fn init_tracing(verbosity: u8) {
    if let Err(err) = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!("tracing subscriber not installed: {err}");
    }
}
