//! Bridge into the `tracing` ecosystem.

use crate::entry::{Entry, Level};
use crate::logger::Consumer;
use std::sync::Arc;

/// Returns a consumer that forwards each entry to the corresponding
/// `tracing` macro, carrying the entry path as a `path` field.
///
/// This lets a logger feed whatever subscriber the embedding
/// application has installed (console, file, OpenTelemetry) without
/// this crate knowing about it. `Fatal` maps to `tracing::error!`,
/// since `tracing` has no fatal level.
///
/// # Example
///
/// ```
/// use pathlog::{consumer, Level, Logger};
///
/// let logger = Logger::from_consumer("svc", consumer::tracing_bridge());
/// logger.log(Level::Info, "visible to the installed subscriber");
/// ```
pub fn tracing_bridge() -> Consumer {
    Arc::new(|entry: &Entry| {
        let path = entry.path();
        let message = entry.message();
        match entry.level() {
            Level::Debug => tracing::debug!(path = path, "{}", message),
            Level::Info => tracing::info!(path = path, "{}", message),
            Level::Warn => tracing::warn!(path = path, "{}", message),
            Level::Error | Level::Fatal => tracing::error!(path = path, "{}", message),
        }
    })
}
