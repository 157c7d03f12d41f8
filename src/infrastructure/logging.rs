//! Logging setup
//!
//! Installs a `tracing` subscriber writing compact lines to stderr, so
//! command output on stdout stays machine-readable. `RUST_LOG` directives
//! take precedence over the configured verbosity.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Verbosity;
use crate::error::{MenuError, MenuResult};

/// Map a verbosity to the default level filter
pub fn level_for(verbosity: Verbosity) -> LevelFilter {
    match verbosity {
        Verbosity::Quiet => LevelFilter::ERROR,
        Verbosity::Normal => LevelFilter::WARN,
        Verbosity::Verbose => LevelFilter::INFO,
        Verbosity::Debug => LevelFilter::DEBUG,
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(verbosity: Verbosity, ansi: bool) -> MenuResult<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| MenuError::Logging {
            message: e.to_string(),
        })
}
