//! Wire types for the control-plane describe APIs.
//!
//! Field names follow the provider's PascalCase JSON convention.
//! Events and resources are read-only snapshots; the monitoring core
//! never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One resource belonging to a stack
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackResource {
    /// Logical name of the resource within the stack template
    pub logical_resource_id: String,

    /// Provider-assigned identifier; for a nested stack this is the
    /// child stack's identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,

    /// Provider resource type classification
    pub resource_type: String,

    /// Current status of the resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_status: Option<String>,
}

/// One change event recorded for a stack
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackEvent {
    /// Unique identifier of the event
    pub event_id: String,

    /// Identifier of the stack the event belongs to
    pub stack_id: String,

    /// Human-readable name of the stack
    pub stack_name: String,

    /// Logical name of the affected resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_resource_id: Option<String>,

    /// Provider-assigned identifier of the affected resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,

    /// Type of the affected resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Status the resource transitioned to (e.g. "CREATE_COMPLETE")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_status: Option<String>,

    /// Provider-supplied explanation for the status, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_status_reason: Option<String>,

    /// When the event occurred (provider-assigned, nanosecond-capable)
    pub timestamp: DateTime<Utc>,
}

/// Response body of a DescribeStackResources call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackResourcesOutput {
    #[serde(default)]
    pub stack_resources: Vec<StackResource>,
}

/// One page of a DescribeStackEvents call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackEventsOutput {
    #[serde(default)]
    pub stack_events: Vec<StackEvent>,

    /// Token for the next page; absent on the last page
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Error body returned by the control plane on failed calls
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
