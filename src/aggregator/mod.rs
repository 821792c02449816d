//! Aggregation of stack change events into a chronological view.
//!
//! This module turns a root stack identifier into:
//! - The flat set of stacks nested beneath it (discovery)
//! - One time-ordered sequence of change events across all of them

pub mod discovery;
pub mod events;

// Re-export main types and functions
pub use discovery::discover_stack_tree;
pub use events::{last_event_time, list_events};
