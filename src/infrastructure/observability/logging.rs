use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;

/// Filter from `RUST_LOG`, INFO when unset. Invalid directives are skipped.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
}

/// Same defaults as [`env_filter`], from an explicit directive string.
pub fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .parse_lossy(directives)
}

/// Install the global subscriber. Warnings and errors go to stderr, the rest to stdout.
pub fn init() {
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .init();
}
