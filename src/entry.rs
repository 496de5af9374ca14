//! Log entry value types.

use chrono::{DateTime, Utc};
use std::fmt;

/// Severity of a log entry.
///
/// Levels are ordered by increasing severity, `Debug` lowest and
/// `Fatal` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
    /// Unrecoverable failures
    Fatal,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        };
        f.write_str(name)
    }
}

/// A single immutable log event.
///
/// An entry records the severity, the wall-clock time it was created,
/// the path of the logger that produced it, and the fully rendered
/// message text. Once constructed, no field ever changes; transforming
/// consumers build a replacement value instead (see
/// [`Entry::with_message`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    level: Level,
    time: DateTime<Utc>,
    path: String,
    message: String,
}

impl Entry {
    /// Create an entry from its four fields.
    ///
    /// Logging calls capture `time` themselves; this constructor exists
    /// for consumers that rebuild entries and for tests that need a
    /// fixed timestamp.
    pub fn new(
        level: Level,
        time: DateTime<Utc>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            time,
            path: path.into(),
            message: message.into(),
        }
    }

    /// Severity of this entry.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Wall-clock time captured when the entry was created.
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Path of the logger that produced this entry. May be empty.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Rendered message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a new entry with the message replaced and every other
    /// field carried over unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }
}

impl fmt::Display for Entry {
    /// Renders the fixed textual layout `[<timestamp>|<LEVEL>]<path> :<message>`.
    ///
    /// The timestamp is the entry's stored creation time, rendered as
    /// UTC `%Y-%m-%dT%H:%M:%S%.3fZ`. Consumers that parse log lines can
    /// rely on this exact layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]{} :{}",
            self.time.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.level,
            self.path,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_level_display_uppercase() {
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn test_entry_accessors() {
        let entry = Entry::new(Level::Warn, fixed_time(), "svc/db", "slow query");

        assert_eq!(entry.level(), Level::Warn);
        assert_eq!(entry.time(), fixed_time());
        assert_eq!(entry.path(), "svc/db");
        assert_eq!(entry.message(), "slow query");
    }

    #[test]
    fn test_with_message_replaces_only_the_message() {
        let entry = Entry::new(Level::Info, fixed_time(), "svc", "before");
        let replaced = entry.clone().with_message("after");

        assert_eq!(replaced.message(), "after");
        assert_eq!(replaced.level(), entry.level());
        assert_eq!(replaced.time(), entry.time());
        assert_eq!(replaced.path(), entry.path());
    }

    #[test]
    fn test_display_layout() {
        let entry = Entry::new(Level::Info, fixed_time(), "svc/db", "ready");
        assert_eq!(
            entry.to_string(),
            "[2024-03-09T14:05:07.000Z|INFO]svc/db :ready"
        );
    }

    #[test]
    fn test_display_with_empty_path() {
        let entry = Entry::new(Level::Fatal, fixed_time(), "", "boot failed");
        assert_eq!(
            entry.to_string(),
            "[2024-03-09T14:05:07.000Z|FATAL] :boot failed"
        );
    }

    #[test]
    fn test_display_uses_stored_time() {
        let entry = Entry::new(Level::Debug, fixed_time(), "svc", "tick");
        let first = entry.to_string();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(entry.to_string(), first);
    }
}
