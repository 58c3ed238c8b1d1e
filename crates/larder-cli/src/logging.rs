use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn directive(level: LogLevel) -> String {
    // Only our own crates; dependencies stay at warn.
    let level = level.to_string();
    [
        "larder",
        "larder_types",
        "larder_engine",
        "larder_store",
        "larder_runtime",
    ]
    .iter()
    .fold("warn".to_string(), |acc, krate| {
        format!("{},{}={}", acc, krate, level)
    })
}
