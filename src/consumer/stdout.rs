//! Console-printing consumer.

use crate::entry::Entry;
use crate::logger::Consumer;
use std::sync::Arc;

/// Returns a consumer that prints each entry's textual form to
/// standard output, one line per entry.
///
/// The printed layout is the entry's `Display` rendering,
/// `[<timestamp>|<LEVEL>]<path> :<message>`. This is the consumer
/// behind [`Logger::stdout`](crate::Logger::stdout).
pub fn stdout() -> Consumer {
    Arc::new(|entry: &Entry| println!("{entry}"))
}
