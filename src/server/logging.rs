use tracing::Level;
use tracing_subscriber::{filter::Targets, prelude::*};

/// Installs the global tracing subscriber.
///
/// Logs to stdout with noisy database-driver targets capped at INFO while the
/// application itself logs at DEBUG.
pub fn setup_logging() {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_level(true)
        .with_target(true);

    let filter = Targets::new()
        .with_target("sqlx", Level::INFO)
        .with_target("sea_orm", Level::INFO)
        .with_target("tower_sessions", Level::INFO)
        .with_default(Level::DEBUG);

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .init();
}
