//! HTTP client for the orchestration control-plane describe APIs.

use super::types::{
    ApiErrorBody, DescribeStackEventsOutput, DescribeStackResourcesOutput, StackEvent,
    StackResource,
};
use crate::utils::config::DEFAULT_API_TIMEOUT;
use crate::utils::error::ApiError;
use log::debug;
use reqwest::blocking::Client;

/// Capability surface the monitoring core consumes.
///
/// Implementations talk to a real control plane; tests substitute
/// in-memory fakes, so nothing holds a process-wide client handle.
pub trait StackOperations {
    /// List the resources belonging to one stack (single-shot)
    fn describe_stack_resources(&self, stack_id: &str) -> Result<Vec<StackResource>, ApiError>;

    /// Stream the event history of one stack, one page at a time.
    ///
    /// The handler is called once per page in provider order and
    /// returns whether to continue with the next page.
    fn describe_stack_events_pages(
        &self,
        stack_id: &str,
        page_handler: &mut dyn FnMut(&[StackEvent]) -> bool,
    ) -> Result<(), ApiError>;
}

/// Blocking JSON client for a CloudFormation-compatible control plane
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(DEFAULT_API_TIMEOUT)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            endpoint: normalize_endpoint(endpoint.into()),
        })
    }

    /// Issue one describe call and decode its JSON body
    fn call<T: serde::de::DeserializeOwned>(
        &self,
        action: &str,
        stack_id: &str,
        next_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut body = serde_json::Map::new();
        body.insert("Action".to_string(), serde_json::json!(action));
        body.insert("StackName".to_string(), serde_json::json!(stack_id));
        if let Some(token) = next_token {
            body.insert("NextToken".to_string(), serde_json::json!(token));
        }

        debug!("API request: {} for stack {}", action, stack_id);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(ApiError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(map_api_error(status, &text, stack_id));
        }

        response.json().map_err(ApiError::RequestFailed)
    }
}

impl StackOperations for ApiClient {
    fn describe_stack_resources(&self, stack_id: &str) -> Result<Vec<StackResource>, ApiError> {
        let output: DescribeStackResourcesOutput =
            self.call("DescribeStackResources", stack_id, None)?;

        debug!(
            "Stack {} reported {} resource(s)",
            stack_id,
            output.stack_resources.len()
        );

        Ok(output.stack_resources)
    }

    fn describe_stack_events_pages(
        &self,
        stack_id: &str,
        page_handler: &mut dyn FnMut(&[StackEvent]) -> bool,
    ) -> Result<(), ApiError> {
        let mut next_token: Option<String> = None;

        loop {
            let page: DescribeStackEventsOutput =
                self.call("DescribeStackEvents", stack_id, next_token.as_deref())?;

            if !page_handler(&page.stack_events) {
                return Ok(());
            }

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => return Ok(()),
            }
        }
    }
}

/// Normalize endpoint URL by stripping any trailing slash
fn normalize_endpoint(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_string()
}

/// Map a failed HTTP response to our error type
fn map_api_error(status: reqwest::StatusCode, body: &str, stack_id: &str) -> ApiError {
    if let Ok(error) = serde_json::from_str::<ApiErrorBody>(body) {
        if error.code == "Throttling" {
            return ApiError::Throttled;
        }
        if error.code == "ValidationError" && error.message.contains("does not exist") {
            return ApiError::StackNotFound(stack_id.to_string());
        }
        return ApiError::InvalidResponse(format!("{}: {}", error.code, error.message));
    }

    ApiError::InvalidResponse(format!("HTTP {}: {}", status, body))
}
