//! JSON event-sequence output writer.
//!
//! Writes aggregated event sequences to JSON files for downstream
//! tooling, preserving chronological order.

use crate::api::StackEvent;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write an event sequence to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `events` - Chronologically ordered events to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_events(
    events: &[StackEvent],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} event(s) to: {}", events.len(), output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, events).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read an event sequence back from a JSON file
///
/// **Public** - useful for downstream tooling and testing
pub fn read_events(input_path: impl AsRef<Path>) -> Result<Vec<StackEvent>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading events from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let events: Vec<StackEvent> =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("Loaded {} event(s)", events.len());

    Ok(events)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::NamedTempFile;

    fn create_test_events() -> Vec<StackEvent> {
        vec![
            StackEvent {
                event_id: "evt-1".to_string(),
                stack_id: "stack-1".to_string(),
                stack_name: "app".to_string(),
                logical_resource_id: Some("Database".to_string()),
                physical_resource_id: None,
                resource_type: Some("AWS::RDS::DBInstance".to_string()),
                resource_status: Some("CREATE_COMPLETE".to_string()),
                resource_status_reason: None,
                timestamp: Utc.timestamp_opt(100, 0).unwrap(),
            },
            StackEvent {
                event_id: "evt-2".to_string(),
                stack_id: "stack-1".to_string(),
                stack_name: "app".to_string(),
                logical_resource_id: None,
                physical_resource_id: None,
                resource_type: None,
                resource_status: Some("UPDATE_IN_PROGRESS".to_string()),
                resource_status_reason: Some("User Initiated".to_string()),
                timestamp: Utc.timestamp_opt(200, 0).unwrap(),
            },
        ]
    }

    #[test]
    fn test_write_and_read_events() {
        let events = create_test_events();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_events(&events, path).unwrap();
        let loaded = read_events(path).unwrap();

        assert_eq!(loaded.len(), events.len());
        assert_eq!(loaded[0].event_id, events[0].event_id);
        assert_eq!(loaded[1].timestamp, events[1].timestamp);
    }

    #[test]
    fn test_write_empty_sequence() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_events(&[], path).unwrap();
        let loaded = read_events(path).unwrap();

        assert!(loaded.is_empty());
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/events.json");

        write_events(&create_test_events(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
