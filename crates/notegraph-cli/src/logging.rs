//! Tracing subscriber setup

use notegraph_config::LoggingConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Pick the level: explicit flag, then `--verbose`, then config, then `warn`
pub fn resolve_level(
    flag: Option<LogLevel>,
    verbose: bool,
    config: Option<&LoggingConfig>,
) -> LevelFilter {
    if let Some(level) = flag {
        return level.into();
    }
    if verbose {
        return LevelFilter::DEBUG;
    }
    config
        .and_then(|logging| logging.level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::WARN)
}

/// Install the global fmt subscriber, writing to stderr
///
/// `RUST_LOG` directives are layered on top of the chosen default level.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
