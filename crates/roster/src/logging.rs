//! Logging setup for roster.
//!
//! Both binaries initialize tracing through here so `-v`/`-q` flags and
//! `RUST_LOG` behave identically on the server and the client shell.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Normal output level (info and above).
    #[default]
    Normal,
    /// Verbose output (debug and above).
    Verbose,
    /// Very verbose output (trace level).
    Trace,
}

impl Verbosity {
    /// The tracing level this verbosity maps to.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Initialize the logging system.
///
/// Called once at binary startup. `RUST_LOG` takes precedence over the
/// flag-derived verbosity. Repeated calls are ignored.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("roster={}", verbosity.level());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}

/// Initialize logging for tests, keeping output attached to the test harness.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::Quiet.level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.level(), Level::INFO);
        assert_eq!(Verbosity::Verbose.level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.level(), Level::TRACE);
    }

    #[test]
    fn test_verbosity_default() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(Verbosity::Normal);
        init_logging(Verbosity::Trace);
    }

    #[test]
    fn test_init_test_logging_does_not_panic() {
        init_test_logging();
    }
}
