//! Tracing subscriber setup

use roster_core::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
