//! Text rendering of event sequences for the terminal.

use crate::api::StackEvent;

/// Render an event sequence as text, one event per line
///
/// **Public** - used by the events command for stdout output
pub fn render_events(events: &[StackEvent]) -> String {
    let mut out = String::new();
    for event in events {
        out.push_str(&render_event_line(event));
        out.push('\n');
    }
    out
}

/// Render a single event as a fixed-width line
fn render_event_line(event: &StackEvent) -> String {
    format!(
        "{}  {:<24} {:<32} {:<28} {}",
        event.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        event.resource_status.as_deref().unwrap_or("-"),
        event.resource_type.as_deref().unwrap_or("-"),
        event
            .logical_resource_id
            .as_deref()
            .unwrap_or(&event.stack_name),
        event.resource_status_reason.as_deref().unwrap_or("")
    )
}
