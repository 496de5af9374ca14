//! Ready-made consumers for the common sinks.
//!
//! Each function returns a [`Consumer`](crate::Consumer) value that can
//! be handed to [`Logger::from_consumer`](crate::Logger::from_consumer)
//! or swapped in with the consumer combinators. Anything else that fits
//! the consumer shape (a file appender, a network shipper) plugs in the
//! same way; nothing here is special-cased.

mod discard;
mod stdout;
mod tracing_bridge;

pub use discard::discard;
pub use stdout::stdout;
pub use tracing_bridge::tracing_bridge;
