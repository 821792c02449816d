//! Discovery of the nested-stack tree beneath a root stack.
//!
//! Stacks may contain resources that are themselves stacks. Discovery
//! follows that relationship transitively and returns the flat list of
//! stack identifiers, root first.

use crate::api::StackOperations;
use crate::utils::config::NESTED_STACK_RESOURCE_TYPE;
use crate::utils::error::MonitorError;
use log::{debug, warn};
use std::collections::HashSet;

/// Discover every stack reachable from the root through nested-stack
/// resources.
///
/// **Public** - used by the event aggregation entry points
///
/// # Arguments
/// * `client` - Control-plane capability handle
/// * `root_stack_id` - Identifier of the root stack (must be non-empty)
///
/// # Returns
/// Ordered list of stack identifiers, root first, each appearing once
///
/// # Algorithm
/// 1. Seed a worklist with the root identifier
/// 2. Walk the worklist by index while it grows
/// 3. For each stack, list its resources and append unseen child stack
///    identifiers
/// 4. Stop once every scheduled identifier has been processed
pub fn discover_stack_tree<C: StackOperations>(
    client: &C,
    root_stack_id: &str,
) -> Result<Vec<String>, MonitorError> {
    if root_stack_id.is_empty() {
        return Err(MonitorError::MissingStackId);
    }

    let mut stacks = vec![root_stack_id.to_string()];
    let mut scheduled: HashSet<String> = stacks.iter().cloned().collect();

    let mut n = 0;
    while n < stacks.len() {
        let stack_id = stacks[n].clone();
        n += 1;

        let resources = match client.describe_stack_resources(&stack_id) {
            Ok(resources) => resources,
            Err(err) => {
                // A stack whose resources cannot be listed contributes
                // no children; the rest of the tree is still walked
                warn!("Skipping resources of stack {}: {}", stack_id, err);
                continue;
            }
        };

        for resource in resources {
            if resource.resource_type != NESTED_STACK_RESOURCE_TYPE {
                continue;
            }

            let Some(child_id) = resource.physical_resource_id else {
                debug!(
                    "Nested stack resource {} has no physical id yet",
                    resource.logical_resource_id
                );
                continue;
            };

            // An identifier is scheduled at most once, so cyclic or
            // repeated provider reports cannot loop the walk
            if scheduled.insert(child_id.clone()) {
                stacks.push(child_id);
            }
        }
    }

    debug!(
        "Discovered {} stack(s) under root {}",
        stacks.len(),
        root_stack_id
    );

    Ok(stacks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StackResource;
    use crate::utils::error::ApiError;
    use std::collections::HashMap;

    struct FakeResources {
        resources: HashMap<String, Vec<StackResource>>,
        fail_for: Vec<String>,
    }

    impl FakeResources {
        fn new() -> Self {
            Self {
                resources: HashMap::new(),
                fail_for: Vec::new(),
            }
        }

        fn with_children(mut self, stack_id: &str, children: &[&str]) -> Self {
            let resources = children.iter().map(|child| nested_resource(child)).collect();
            self.resources.insert(stack_id.to_string(), resources);
            self
        }
    }

    impl StackOperations for FakeResources {
        fn describe_stack_resources(
            &self,
            stack_id: &str,
        ) -> Result<Vec<StackResource>, ApiError> {
            if self.fail_for.iter().any(|id| id == stack_id) {
                return Err(ApiError::InvalidResponse("listing failed".to_string()));
            }
            Ok(self.resources.get(stack_id).cloned().unwrap_or_default())
        }

        fn describe_stack_events_pages(
            &self,
            _stack_id: &str,
            _page_handler: &mut dyn FnMut(&[crate::api::StackEvent]) -> bool,
        ) -> Result<(), ApiError> {
            unreachable!("discovery never fetches events")
        }
    }

    fn nested_resource(child_id: &str) -> StackResource {
        StackResource {
            logical_resource_id: format!("Nested{}", child_id),
            physical_resource_id: Some(child_id.to_string()),
            resource_type: NESTED_STACK_RESOURCE_TYPE.to_string(),
            resource_status: Some("CREATE_COMPLETE".to_string()),
        }
    }

    fn plain_resource(logical_id: &str) -> StackResource {
        StackResource {
            logical_resource_id: logical_id.to_string(),
            physical_resource_id: Some(format!("{}-physical", logical_id)),
            resource_type: "AWS::S3::Bucket".to_string(),
            resource_status: None,
        }
    }

    #[test]
    fn test_empty_root_id_rejected() {
        let client = FakeResources::new();
        let err = discover_stack_tree(&client, "").unwrap_err();
        assert!(matches!(err, MonitorError::MissingStackId));
    }

    #[test]
    fn test_single_stack_without_children() {
        let client = FakeResources::new();
        let stacks = discover_stack_tree(&client, "root").unwrap();
        assert_eq!(stacks, vec!["root".to_string()]);
    }

    #[test]
    fn test_discovers_transitive_children_in_order() {
        let client = FakeResources::new()
            .with_children("root", &["child-a", "child-b"])
            .with_children("child-a", &["grandchild"]);

        let stacks = discover_stack_tree(&client, "root").unwrap();

        assert_eq!(stacks, vec!["root", "child-a", "child-b", "grandchild"]);
    }

    #[test]
    fn test_non_stack_resources_ignored() {
        let mut client = FakeResources::new();
        client.resources.insert(
            "root".to_string(),
            vec![plain_resource("Bucket"), nested_resource("child")],
        );

        let stacks = discover_stack_tree(&client, "root").unwrap();

        assert_eq!(stacks, vec!["root", "child"]);
    }

    #[test]
    fn test_cycle_terminates() {
        // child reports the root as its own nested stack
        let client = FakeResources::new()
            .with_children("root", &["child"])
            .with_children("child", &["root"]);

        let stacks = discover_stack_tree(&client, "root").unwrap();

        assert_eq!(stacks, vec!["root", "child"]);
    }

    #[test]
    fn test_duplicate_reports_collapsed() {
        let client = FakeResources::new().with_children("root", &["child", "child"]);

        let stacks = discover_stack_tree(&client, "root").unwrap();

        assert_eq!(stacks, vec!["root", "child"]);
    }

    #[test]
    fn test_listing_failure_skips_stack_but_continues() {
        let mut client = FakeResources::new()
            .with_children("root", &["child-a", "child-b"])
            .with_children("child-b", &["grandchild"]);
        client.fail_for.push("child-a".to_string());

        let stacks = discover_stack_tree(&client, "root").unwrap();

        // child-a stays in the tree; only its children are lost
        assert_eq!(stacks, vec!["root", "child-a", "child-b", "grandchild"]);
    }

    #[test]
    fn test_root_listing_failure_returns_root_alone() {
        let mut client = FakeResources::new();
        client.fail_for.push("root".to_string());

        let stacks = discover_stack_tree(&client, "root").unwrap();

        assert_eq!(stacks, vec!["root".to_string()]);
    }

    #[test]
    fn test_nested_resource_without_physical_id_skipped() {
        let mut client = FakeResources::new();
        client.resources.insert(
            "root".to_string(),
            vec![StackResource {
                logical_resource_id: "Pending".to_string(),
                physical_resource_id: None,
                resource_type: NESTED_STACK_RESOURCE_TYPE.to_string(),
                resource_status: Some("CREATE_IN_PROGRESS".to_string()),
            }],
        );

        let stacks = discover_stack_tree(&client, "root").unwrap();

        assert_eq!(stacks, vec!["root".to_string()]);
    }
}
