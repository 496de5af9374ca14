//! A consumer that discards every entry.

use crate::entry::Entry;
use crate::logger::Consumer;
use std::sync::Arc;

/// Returns a consumer that silently drops all entries.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where sink overhead should be eliminated
/// - Silent operation modes
///
/// This is the consumer behind [`Logger::default`](crate::Logger::default).
pub fn discard() -> Consumer {
    Arc::new(|_entry: &Entry| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, Level};
    use chrono::Utc;

    #[test]
    fn test_discard_accepts_any_entry() {
        let consumer = discard();
        consumer(&Entry::new(Level::Debug, Utc::now(), "", ""));
        consumer(&Entry::new(Level::Fatal, Utc::now(), "svc/db", "boom"));
    }
}
