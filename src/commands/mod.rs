//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod events;

// Re-export main command functions
pub use events::{execute_events, execute_last_event, parse_since, validate_args, EventsArgs};
