//! Error types for the terminal front end.
//!
//! [`CliError`] is the top-level error type that wraps all failure
//! modes during startup and the session run, so `main` can propagate
//! everything with `?`.

/// Top-level error for the `longnight` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: longnight_sim::ConfigError,
    },

    /// The input channel failed or closed mid-session.
    #[error("input error: {source}")]
    Input {
        /// The underlying action source error.
        #[from]
        source: longnight_sim::ActionSourceError,
    },
}
