//! Event log for observability and replay debugging.

mod event_log;

pub use event_log::{Event, EventKind, EventLog};
