//! Operation handlers.
//!
//! Handlers are thin adapters between already-extracted caller fields and a
//! resource client: they build the JSON:API envelope where one is needed,
//! call exactly one client method, and wrap failures with a line of context
//! naming the operation.
//!
//! [`execute`] routes an [`Operation`] to the handler matching the client a
//! [`ClientFactory`](crate::api::ClientFactory) produced.
//!
//! # Example
//!
//! ```rust,ignore
//! use pulse_api::api::{ActivityAssignment, ClientFactory};
//! use pulse_api::operations::{execute, Operation};
//!
//! let client = ClientFactory::new().create_client(Some(&config), Some("activity"))?;
//! let result = execute(
//!     &client,
//!     Operation::AssignActivityMember {
//!         activity_id: "7".to_string(),
//!         assignment: ActivityAssignment::new("acc-1", true),
//!     },
//! )
//! .await?;
//! ```

mod errors;

pub mod account;
pub mod activity;
pub mod people;
pub mod talent;

pub use errors::OperationError;
pub use people::PersonFields;

use serde_json::Value;

use crate::api::{ActivityAssignment, PulseClient};
use crate::clients::{HttpMethod, QueryParams};
use crate::rest::{ListParams, ResourceKind};

/// A resource operation requested by a host.
#[derive(Clone, Debug)]
pub enum Operation {
    /// List resources of a kind.
    List {
        resource: ResourceKind,
        params: ListParams,
    },
    /// Fetch one resource, side-loading `included`.
    Get {
        resource: ResourceKind,
        id: String,
        included: Vec<String>,
    },
    /// Create a resource from raw attributes.
    Create {
        resource: ResourceKind,
        attributes: Value,
    },
    /// Update a resource from raw attributes.
    Update {
        resource: ResourceKind,
        id: String,
        attributes: Value,
    },
    /// Delete a resource.
    Delete { resource: ResourceKind, id: String },
    /// Create a person from form fields.
    CreatePerson(PersonFields),
    /// Update a person from form fields.
    UpdatePerson { id: String, fields: PersonFields },
    /// Assign a member to an activity.
    AssignActivityMember {
        activity_id: String,
        assignment: ActivityAssignment,
    },
    /// Remove the member assigned to an activity.
    UnassignActivityMember { activity_id: String },
    /// Send a raw request through the client's executor.
    Request {
        method: HttpMethod,
        path: String,
        body: Option<Value>,
        query: Option<QueryParams>,
    },
}

impl Operation {
    /// Returns the operation identifier used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Get { .. } => "get",
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::CreatePerson(_) => "createPerson",
            Self::UpdatePerson { .. } => "updatePerson",
            Self::AssignActivityMember { .. } => "assignActivityMember",
            Self::UnassignActivityMember { .. } => "unassignActivityMember",
            Self::Request { .. } => "request",
        }
    }

    /// Returns the resource kind a CRUD operation addresses.
    #[must_use]
    pub const fn resource(&self) -> Option<ResourceKind> {
        match self {
            Self::List { resource, .. }
            | Self::Get { resource, .. }
            | Self::Create { resource, .. }
            | Self::Update { resource, .. }
            | Self::Delete { resource, .. } => Some(*resource),
            Self::CreatePerson(_) | Self::UpdatePerson { .. } => Some(ResourceKind::People),
            Self::AssignActivityMember { .. } | Self::UnassignActivityMember { .. } => {
                Some(ResourceKind::Activity)
            }
            Self::Request { .. } => None,
        }
    }

    fn unsupported(&self, client: &PulseClient) -> OperationError {
        let resource = self
            .resource()
            .map_or_else(|| client.name().to_string(), |kind| kind.api_type().to_string());
        OperationError::Unsupported {
            resource,
            operation: self.name(),
        }
    }
}

/// Runs `operation` against `client`.
///
/// Raw requests are accepted by every client. CRUD operations are accepted
/// when the client serves the addressed resource kind; everything else is
/// [`OperationError::Unsupported`].
///
/// # Errors
///
/// Returns [`OperationError::Unsupported`] when no handler matches, and
/// [`OperationError::Failed`] when the client call fails.
pub async fn execute(client: &PulseClient, operation: Operation) -> Result<Value, OperationError> {
    tracing::debug!(client = client.name(), operation = operation.name(), "Executing operation");

    if let Operation::Request {
        method,
        path,
        body,
        query,
    } = operation
    {
        return client
            .api()
            .request(method, &path, body, query)
            .await
            .map_err(|e| OperationError::failed("Error sending request", e));
    }

    match client {
        PulseClient::People(api) => execute_people(api, client, operation).await,
        PulseClient::Account(api) => execute_account(api, client, operation).await,
        PulseClient::Talent(api) => execute_talent(api, client, operation).await,
        PulseClient::Workflow(api) => execute_workflow(api, client, operation).await,
        PulseClient::Generic(_) => Err(operation.unsupported(client)),
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

async fn execute_people(
    api: &crate::api::PeopleApi,
    client: &PulseClient,
    operation: Operation,
) -> Result<Value, OperationError> {
    const KIND: ResourceKind = ResourceKind::People;

    match operation {
        Operation::List { resource: KIND, params } => people::get_people_list(api, Some(&params)).await,
        Operation::Get {
            resource: KIND,
            id,
            included,
        } => people::get_person_by_id(api, &id, &as_strs(&included)).await,
        Operation::Create {
            resource: KIND,
            attributes,
        } => people::create_person_from_attributes(api, attributes).await,
        Operation::Update {
            resource: KIND,
            id,
            attributes,
        } => people::update_person_from_attributes(api, &id, attributes).await,
        Operation::CreatePerson(fields) => people::create_person(api, &fields).await,
        Operation::UpdatePerson { id, fields } => people::update_person(api, &id, &fields).await,
        Operation::Delete { resource: KIND, id } => people::delete_person(api, &id).await,
        other => Err(other.unsupported(client)),
    }
}

async fn execute_account(
    api: &crate::api::AccountApi,
    client: &PulseClient,
    operation: Operation,
) -> Result<Value, OperationError> {
    const KIND: ResourceKind = ResourceKind::Account;

    match operation {
        Operation::List { resource: KIND, params } => {
            account::get_account_list(api, Some(&params)).await
        }
        Operation::Get {
            resource: KIND,
            id,
            included,
        } => account::get_account_by_id(api, &id, &as_strs(&included)).await,
        Operation::Create {
            resource: KIND,
            attributes,
        } => account::create_account(api, attributes).await,
        Operation::Update {
            resource: KIND,
            id,
            attributes,
        } => account::update_account(api, &id, attributes).await,
        Operation::Delete { resource: KIND, id } => account::delete_account(api, &id).await,
        other => Err(other.unsupported(client)),
    }
}

async fn execute_talent(
    api: &crate::api::TalentApi,
    client: &PulseClient,
    operation: Operation,
) -> Result<Value, OperationError> {
    match operation {
        Operation::List { resource, params } => talent::get_list(api, resource, Some(&params)).await,
        Operation::Get {
            resource,
            id,
            included,
        } => talent::get_by_id(api, resource, &id, &as_strs(&included)).await,
        Operation::Create {
            resource,
            attributes,
        } => talent::create(api, resource, attributes).await,
        Operation::Update {
            resource,
            id,
            attributes,
        } => talent::update(api, resource, &id, attributes).await,
        Operation::Delete { resource, id } => talent::delete(api, resource, &id).await,
        other => Err(other.unsupported(client)),
    }
}

async fn execute_workflow(
    api: &crate::api::WorkflowApi,
    client: &PulseClient,
    operation: Operation,
) -> Result<Value, OperationError> {
    const KIND: ResourceKind = ResourceKind::Activity;

    match operation {
        Operation::List { resource: KIND, params } => {
            activity::get_activity_list(api, Some(&params)).await
        }
        Operation::Get {
            resource: KIND,
            id,
            included,
        } => activity::get_activity_by_id(api, &id, &as_strs(&included)).await,
        Operation::Create {
            resource: KIND,
            attributes,
        } => activity::create_activity(api, attributes).await,
        Operation::Update {
            resource: KIND,
            id,
            attributes,
        } => activity::update_activity(api, &id, attributes).await,
        Operation::Delete { resource: KIND, id } => activity::delete_activity(api, &id).await,
        Operation::AssignActivityMember {
            activity_id,
            assignment,
        } => activity::assign_activity_member(api, &activity_id, &assignment).await,
        Operation::UnassignActivityMember { activity_id } => {
            activity::unassign_activity_member(api, &activity_id).await
        }
        other => Err(other.unsupported(client)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClientFactory;
    use crate::config::{ApiToken, BaseUrl, PulseConfig};
    use serde_json::json;

    fn client(resource: &str) -> PulseClient {
        let config = PulseConfig::builder()
            .base_url(BaseUrl::new("http://127.0.0.1:9").unwrap())
            .api_token(ApiToken::new("t").unwrap())
            .build()
            .unwrap();
        ClientFactory::new()
            .create_client(Some(&config), Some(resource))
            .unwrap()
    }

    #[tokio::test]
    async fn test_assignment_on_people_client_is_unsupported() {
        let result = execute(
            &client("people"),
            Operation::AssignActivityMember {
                activity_id: "7".to_string(),
                assignment: ActivityAssignment::new("acc", false),
            },
        )
        .await;

        match result {
            Err(OperationError::Unsupported {
                resource,
                operation,
            }) => {
                assert_eq!(resource, "workflow/activities");
                assert_eq!(operation, "assignActivityMember");
            }
            other => panic!("expected Unsupported, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_mismatched_kind_is_unsupported() {
        let result = execute(
            &client("account"),
            Operation::Delete {
                resource: ResourceKind::Skill,
                id: "1".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(OperationError::Unsupported { operation: "delete", .. })));
    }

    #[tokio::test]
    async fn test_generic_client_only_accepts_raw_requests() {
        let result = execute(
            &client("foo"),
            Operation::Create {
                resource: ResourceKind::Talent,
                attributes: json!({}),
            },
        )
        .await;
        assert!(matches!(result, Err(OperationError::Unsupported { .. })));
    }

    #[tokio::test]
    async fn test_handler_failure_carries_context() {
        let result = execute(
            &client("activity"),
            Operation::UnassignActivityMember {
                activity_id: " ".to_string(),
            },
        )
        .await;

        let error = result.unwrap_err();
        assert_eq!(
            error.to_string(),
            "Error unassigning member from activity: Activity id must not be empty"
        );
    }

    #[test]
    fn test_operation_resource() {
        let op = Operation::UpdatePerson {
            id: "1".to_string(),
            fields: PersonFields::default(),
        };
        assert_eq!(op.resource(), Some(ResourceKind::People));
        assert_eq!(op.name(), "updatePerson");
    }
}
