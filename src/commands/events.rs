//! Event monitoring command implementations.
//!
//! The events command:
//! 1. Builds the control-plane client
//! 2. Discovers the nested-stack tree and aggregates its events
//! 3. Renders the sequence to stdout (and optionally a JSON file)

use crate::aggregator::{last_event_time, list_events};
use crate::api::ApiClient;
use crate::output::{render_events, write_events};
use crate::utils::config::DEFAULT_ENDPOINT;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use std::path::PathBuf;

/// Arguments for the events command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct EventsArgs {
    /// Control-plane endpoint URL
    pub endpoint: String,

    /// Root stack identifier
    pub stack_id: String,

    /// Only show events strictly after this instant (None = everything)
    pub since: Option<DateTime<Utc>>,

    /// Optional path for a JSON copy of the event sequence
    pub output_json: Option<PathBuf>,
}

impl Default for EventsArgs {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            stack_id: String::new(),
            since: None,
            output_json: None,
        }
    }
}

/// Validate event command arguments
///
/// **Public** - can be called before execute_events for early validation
pub fn validate_args(args: &EventsArgs) -> Result<()> {
    if args.endpoint.is_empty() {
        anyhow::bail!("Endpoint URL cannot be empty");
    }

    if !args.endpoint.starts_with("http://") && !args.endpoint.starts_with("https://") {
        anyhow::bail!("Endpoint URL must start with http:// or https://");
    }

    if args.stack_id.is_empty() {
        anyhow::bail!("Stack identifier cannot be empty");
    }

    Ok(())
}

/// Parse the --since flag as an RFC 3339 instant
///
/// **Public** - used by main.rs before constructing EventsArgs
pub fn parse_since(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .context(format!("Invalid --since value '{}' (expected RFC 3339)", value))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Execute the events command
///
/// **Public** - main entry point called from main.rs
pub fn execute_events(args: EventsArgs) -> Result<()> {
    info!("Listing events for stack tree rooted at {}", args.stack_id);
    info!("Control-plane endpoint: {}", args.endpoint);

    let client = ApiClient::new(&args.endpoint).context("Failed to create control-plane client")?;

    let after = args.since.unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    let events = list_events(&client, &args.stack_id, after)
        .context(format!("Failed to list events for stack {}", args.stack_id))?;

    if events.is_empty() {
        println!("No events after {}", after.to_rfc3339());
    } else {
        print!("{}", render_events(&events));
    }

    if let Some(path) = &args.output_json {
        write_events(&events, path).context("Failed to write events JSON")?;
        info!("✓ Events written to: {}", path.display());
    }

    Ok(())
}

/// Execute the last-event command
///
/// **Public** - main entry point called from main.rs
pub fn execute_last_event(endpoint: &str, stack_id: &str) -> Result<()> {
    info!("Querying last event time for stack tree rooted at {}", stack_id);

    let client = ApiClient::new(endpoint).context("Failed to create control-plane client")?;

    let time = last_event_time(&client, stack_id)
        .context(format!("Failed to query last event time for stack {}", stack_id))?;

    println!("{}", time.to_rfc3339());

    Ok(())
}
