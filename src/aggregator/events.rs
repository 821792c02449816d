//! Event aggregation across a stack tree.
//!
//! Fetches every event for every discovered stack, keeps those strictly
//! after the caller's threshold, and merges them into one
//! chronologically ascending sequence.

use super::discovery::discover_stack_tree;
use crate::api::{StackEvent, StackOperations};
use crate::utils::error::MonitorError;
use chrono::{DateTime, Utc};
use log::debug;

/// List all events across the stack tree that occurred strictly after
/// `after`, ascending by timestamp.
///
/// **Public** - main library entry point
///
/// # Arguments
/// * `client` - Control-plane capability handle
/// * `root_stack_id` - Identifier of the root stack (must be non-empty)
/// * `after` - Exclusive lower bound; events at or before it are dropped
///
/// # Returns
/// Event sequence sorted ascending by timestamp. Empty when no event in
/// any stack is newer than `after`.
///
/// # Errors
/// * `MonitorError::MissingStackId` - empty root identifier; nothing is
///   fetched
/// * `MonitorError::EventFetch` - event retrieval failed for one stack;
///   the whole call aborts rather than return a truncated sequence
pub fn list_events<C: StackOperations>(
    client: &C,
    root_stack_id: &str,
    after: DateTime<Utc>,
) -> Result<Vec<StackEvent>, MonitorError> {
    if root_stack_id.is_empty() {
        return Err(MonitorError::MissingStackId);
    }

    let stacks = discover_stack_tree(client, root_stack_id)?;

    let mut events: Vec<StackEvent> = Vec::new();
    for stack_id in &stacks {
        client
            .describe_stack_events_pages(stack_id, &mut |page| {
                for event in page {
                    if event.timestamp > after {
                        events.push(event.clone());
                    }
                }
                // Keep reading all pages
                true
            })
            .map_err(|source| MonitorError::EventFetch {
                stack_id: stack_id.clone(),
                source,
            })?;
    }

    // Pages arrive in whatever order the provider chooses; a stable
    // sort yields chronological order and keeps insertion order for
    // equal timestamps
    events.sort_by_key(|event| event.timestamp);

    debug!(
        "Collected {} event(s) across {} stack(s)",
        events.len(),
        stacks.len()
    );

    Ok(events)
}

/// Time of the most recent event anywhere in the stack tree.
///
/// **Public** - convenience query built on `list_events`
///
/// # Errors
/// * `MonitorError::NoEvents` - the tree has produced no events at all
pub fn last_event_time<C: StackOperations>(
    client: &C,
    root_stack_id: &str,
) -> Result<DateTime<Utc>, MonitorError> {
    let events = list_events(client, root_stack_id, DateTime::<Utc>::UNIX_EPOCH)?;

    events
        .last()
        .map(|event| event.timestamp)
        .ok_or(MonitorError::NoEvents)
}
