//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for control-plane API requests
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Default control-plane endpoint (local emulator)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4566";

/// Resource type that marks a resource as being itself a stack.
/// Discovery recurses into resources of exactly this type.
pub const NESTED_STACK_RESOURCE_TYPE: &str = "AWS::CloudFormation::Stack";
