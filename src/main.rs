//! Stackwatch CLI
//!
//! Rollout monitoring for nested infrastructure stacks. Aggregates
//! change events across a whole stack tree into one chronological view.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use stackwatch::commands::{
    execute_events, execute_last_event, parse_since, validate_args, EventsArgs,
};
use stackwatch::utils::config::DEFAULT_ENDPOINT;

/// Stackwatch - rollout monitoring for nested infrastructure stacks
#[derive(Parser, Debug)]
#[command(name = "stackwatch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List change events across a stack tree in chronological order
    Events {
        /// Control-plane endpoint URL
        #[arg(short, long, env = "STACKWATCH_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Root stack identifier
        #[arg(short, long)]
        stack_id: String,

        /// Only show events strictly after this RFC 3339 instant
        #[arg(long)]
        since: Option<String>,

        /// Output path for a JSON copy of the event sequence
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the time of the most recent event in the stack tree
    LastEvent {
        /// Control-plane endpoint URL
        #[arg(short, long, env = "STACKWATCH_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Root stack identifier
        #[arg(short, long)]
        stack_id: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Events {
            endpoint,
            stack_id,
            since,
            output,
        } => {
            let since = since.as_deref().map(parse_since).transpose()?;

            let args = EventsArgs {
                endpoint,
                stack_id,
                since,
                output_json: output,
            };

            // Validate args first
            validate_args(&args)?;

            execute_events(args)?;
        }

        Commands::LastEvent { endpoint, stack_id } => {
            execute_last_event(&endpoint, &stack_id)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
fn display_version() {
    println!("Stackwatch v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Rollout monitoring for nested infrastructure stacks.");
}
