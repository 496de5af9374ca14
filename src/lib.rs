//! pathlog - composable, path-scoped logging.
//!
//! This library provides immutable [`Logger`] values that pair a
//! hierarchical path with a consumer closure, and a small combinator
//! set for deriving new loggers: swap the consumer, change or extend
//! the path, chain a second consumer, transform entries in flight.
//!
//! # Architecture
//!
//! - [`Entry`]: an immutable record of one log event (level, time,
//!   path, message) with a fixed textual rendering.
//! - [`Logger`]: an immutable value producing entries and handing each
//!   one to its [`Consumer`], synchronously, exactly once per call.
//! - Combinators: pure methods on [`Logger`] returning new values;
//!   the original logger is never touched.
//! - [`consumer`]: ready-made sinks (discard, stdout, a `tracing`
//!   bridge). Anything matching the consumer shape plugs in the same
//!   way.
//!
//! # Usage
//!
//! ```
//! use pathlog::{log_info, Level, Logger};
//!
//! let root = Logger::stdout();
//! let db = root.append_path("db").indent();
//!
//! db.log(Level::Info, "connection pool ready");
//! log_info!(db, "pool size {}", 4);
//! ```
//!
//! # Thread Safety
//!
//! Loggers and entries are immutable and freely shareable across
//! threads without synchronization. The consumer chain of a logging
//! call runs fully before the call returns; there is no queuing and no
//! background delivery. If a shared consumer wraps a sink that is not
//! thread-safe, synchronizing access is the consumer's job. This layer
//! adds no locking of its own, and it never catches a consumer's
//! failure either.

pub mod consumer;
pub mod entry;
pub mod logger;

pub use entry::{Entry, Level};
pub use logger::{Consumer, Logger};

/// Version of the pathlog library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_root_reexports() {
        let logger = Logger::default().with_path("svc");
        logger.log(Level::Info, "reachable through the crate root");
    }
}
