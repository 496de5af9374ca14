//! Immutable logger values and the combinators that derive them.
//!
//! A [`Logger`] pairs a hierarchical path with a [`Consumer`], the
//! closure every produced [`Entry`] is handed to. Loggers are never
//! mutated; each combinator returns a new, fully independent value, so
//! a logger can be specialized for a subsystem while the original keeps
//! working unchanged:
//!
//! ```
//! use pathlog::{Level, Logger};
//!
//! let root = Logger::stdout();
//! let db = root.append_path("db").indent();
//!
//! db.log(Level::Info, "connection pool ready");
//! root.log(Level::Info, "startup complete");
//! ```

use crate::consumer;
use crate::entry::{Entry, Level};
use chrono::Utc;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Sink of the logging pipeline.
///
/// A consumer is an opaque side-effecting closure invoked with each
/// produced entry. The return value is meaningless; the call exists for
/// its effect. `Send + Sync` so loggers can be shared across threads;
/// a consumer wrapping a non-thread-safe sink must do its own
/// synchronization, the logger layer adds none.
pub type Consumer = Arc<dyn Fn(&Entry) + Send + Sync>;

/// An immutable logger value.
///
/// Holds the path identifying the logical source of its entries and the
/// consumer those entries are delivered to. Any path (including the
/// empty root path) and any consumer (including a no-op) are accepted;
/// there is no validation.
///
/// # Thread Safety
///
/// `Logger` is `Send + Sync` and cheap to clone (the consumer is
/// shared). A logging call runs the consumer synchronously and returns
/// only after it completes; if the consumer's sink is not thread-safe,
/// synchronizing concurrent callers is the consumer's responsibility.
#[derive(Clone)]
pub struct Logger {
    path: String,
    consumer: Consumer,
}

impl Logger {
    /// Create a logger from a path and a consumer closure.
    ///
    /// # Example
    ///
    /// ```
    /// use pathlog::{Entry, Level, Logger};
    ///
    /// let logger = Logger::new("worker", |entry: &Entry| eprintln!("{entry}"));
    /// logger.log(Level::Warn, "queue is filling up");
    /// ```
    pub fn new<C>(path: impl Into<String>, consumer: C) -> Self
    where
        C: Fn(&Entry) + Send + Sync + 'static,
    {
        Self::from_consumer(path, Arc::new(consumer))
    }

    /// Create a logger from a path and an already-shared consumer.
    pub fn from_consumer(path: impl Into<String>, consumer: Consumer) -> Self {
        Self {
            path: path.into(),
            consumer,
        }
    }

    /// Logger with an empty path that prints each entry's textual form
    /// to standard output.
    pub fn stdout() -> Self {
        Self::from_consumer("", consumer::stdout())
    }

    /// Path identifying this logger's logical source. May be empty.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The consumer entries are delivered to.
    pub fn consumer(&self) -> &Consumer {
        &self.consumer
    }

    /// Log a message at the given level.
    ///
    /// Builds an entry carrying the level, the current wall-clock time,
    /// this logger's path and the message, then invokes the consumer
    /// with it exactly once, synchronously, before returning. A panic
    /// raised by the consumer is not caught here and unwinds to the
    /// caller.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        let entry = Entry::new(level, Utc::now(), self.path.clone(), message);
        (self.consumer)(&entry);
    }

    /// Log a pre-formatted argument pack at the given level.
    ///
    /// Usually invoked through [`logf!`](crate::logf) or the per-level
    /// macros, whose `format_args!` expansion rejects mismatched
    /// templates at compile time, before any consumer can run.
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log(level, args.to_string());
    }

    /// Log a debug-level message.
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    /// Log an info-level message.
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    /// Log a warning-level message.
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    /// Log an error-level message.
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    /// Log a fatal-level message.
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Level::Fatal, message);
    }

    /// Returns a logger with the consumer replaced and the path kept.
    pub fn with_consumer<C>(&self, consumer: C) -> Logger
    where
        C: Fn(&Entry) + Send + Sync + 'static,
    {
        Logger {
            path: self.path.clone(),
            consumer: Arc::new(consumer),
        }
    }

    /// Returns a logger with the path replaced and the consumer kept.
    pub fn with_path(&self, path: impl Into<String>) -> Logger {
        Logger {
            path: path.into(),
            consumer: Arc::clone(&self.consumer),
        }
    }

    /// Returns a logger whose path is the current path joined with
    /// `segment`, keeping the consumer.
    ///
    /// Joining follows filesystem path semantics, not string
    /// concatenation: `"a"` joined with `"b"` yields `"a/b"` (platform
    /// separator), and joining onto the empty root path yields the bare
    /// segment.
    pub fn append_path(&self, segment: impl AsRef<Path>) -> Logger {
        let joined = Path::new(&self.path).join(segment);
        Logger {
            path: joined.to_string_lossy().into_owned(),
            consumer: Arc::clone(&self.consumer),
        }
    }

    /// Returns a logger whose consumer runs the existing consumer
    /// first, then `consumer`, on the same entry, in that fixed order.
    ///
    /// There is no isolation between the two: a panic in the first
    /// consumer prevents the second from running.
    pub fn add_consumer<C>(&self, consumer: C) -> Logger
    where
        C: Fn(&Entry) + Send + Sync + 'static,
    {
        let first = Arc::clone(&self.consumer);
        Logger {
            path: self.path.clone(),
            consumer: Arc::new(move |entry: &Entry| {
                first(entry);
                consumer(entry);
            }),
        }
    }

    /// Returns a logger whose consumer feeds `transform(entry)` to the
    /// existing consumer instead of the entry itself.
    ///
    /// `transform` should be pure; the existing consumer never sees the
    /// untransformed entry.
    ///
    /// # Example
    ///
    /// ```
    /// use pathlog::{Entry, Level, Logger};
    ///
    /// let shouting = Logger::stdout()
    ///     .decorate(|entry: Entry| {
    ///         let message = entry.message().to_uppercase();
    ///         entry.with_message(message)
    ///     });
    /// shouting.log(Level::Error, "disk full");
    /// ```
    pub fn decorate<F>(&self, transform: F) -> Logger
    where
        F: Fn(Entry) -> Entry + Send + Sync + 'static,
    {
        let inner = Arc::clone(&self.consumer);
        Logger {
            path: self.path.clone(),
            consumer: Arc::new(move |entry: &Entry| {
                let transformed = transform(entry.clone());
                inner(&transformed);
            }),
        }
    }

    /// Returns a logger that prepends four spaces to each entry's
    /// message before delivery, leaving level, time and path unchanged.
    pub fn indent(&self) -> Logger {
        self.decorate(|entry| {
            let message = format!("    {}", entry.message());
            entry.with_message(message)
        })
    }
}

impl Default for Logger {
    /// Logger with an empty path that discards every entry.
    fn default() -> Self {
        Self::from_consumer("", consumer::discard())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Convenience macros for formatted logging.
///
/// These expand to `format_args!`, so template/argument mismatches are
/// compile errors.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.logf($level, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.logf($crate::Level::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.logf($crate::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.logf($crate::Level::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.logf($crate::Level::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.logf($crate::Level::Fatal, format_args!($($arg)*))
    };
}
