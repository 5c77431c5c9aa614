//! Logging setup.
//!
//! The subscriber is built from an explicit [`LogConfig`] so that the binary
//! can install it globally once, while tests build the same subscriber over
//! their own writer and scope it with `tracing::subscriber::set_default`.

use tracing::subscriber::SetGlobalDefaultError;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for a filter directive when not verbose.
pub const LOG_ENV_VAR: &str = "ANVIL_LOG";

/// Log output configuration fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Emit debug-level records
    pub verbose: bool,
    /// Colorize level names
    pub ansi: bool,
}

impl LogConfig {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Level filter for this configuration.
    ///
    /// `--verbose` always wins; otherwise `ANVIL_LOG` is honored and `info`
    /// is the fallback.
    pub fn env_filter(&self) -> EnvFilter {
        if self.verbose {
            return EnvFilter::new("debug");
        }
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Build a timestamped, leveled subscriber writing to `writer`.
    pub fn subscriber<W>(&self, writer: W) -> impl Subscriber + Send + Sync + 'static
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(writer)
            .with_ansi(self.ansi)
            .with_target(false)
            .finish()
    }

    /// Install the subscriber process-wide, writing to stderr.
    pub fn init(&self) -> Result<(), SetGlobalDefaultError> {
        tracing::subscriber::set_global_default(self.subscriber(std::io::stderr))
    }
}
