//! Workflow activity handlers.

use serde_json::Value;

use crate::api::{ActivityAssignment, WorkflowApi};
use crate::operations::OperationError;
use crate::rest::{Document, ListParams, ResourceKind};

/// Lists activities.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn get_activity_list(
    api: &WorkflowApi,
    params: Option<&ListParams>,
) -> Result<Value, OperationError> {
    api.get_activity_list(params)
        .await
        .map_err(|e| OperationError::failed("Error fetching activity list", e))
}

/// Fetches one activity.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn get_activity_by_id(
    api: &WorkflowApi,
    activity_id: &str,
    included: &[&str],
) -> Result<Value, OperationError> {
    api.get_activity_by_id(activity_id, included)
        .await
        .map_err(|e| OperationError::failed("Error fetching activity", e))
}

/// Creates an activity from raw attributes.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn create_activity(
    api: &WorkflowApi,
    attributes: Value,
) -> Result<Value, OperationError> {
    let document = Document::new(ResourceKind::Activity, attributes);
    api.create_activity(&document)
        .await
        .map_err(|e| OperationError::failed("Error creating activity", e))
}

/// Updates an activity from raw attributes.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn update_activity(
    api: &WorkflowApi,
    activity_id: &str,
    attributes: Value,
) -> Result<Value, OperationError> {
    let document = Document::with_id(ResourceKind::Activity, activity_id, attributes);
    api.update_activity_by_id(activity_id, &document)
        .await
        .map_err(|e| OperationError::failed("Error updating activity", e))
}

/// Deletes an activity.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn delete_activity(api: &WorkflowApi, activity_id: &str) -> Result<Value, OperationError> {
    api.delete_activity_by_id(activity_id)
        .await
        .map_err(|e| OperationError::failed("Error deleting activity", e))
}

/// Assigns a member to an activity.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn assign_activity_member(
    api: &WorkflowApi,
    activity_id: &str,
    assignment: &ActivityAssignment,
) -> Result<Value, OperationError> {
    api.assign_activity_member(activity_id, assignment)
        .await
        .map_err(|e| OperationError::failed("Error assigning member to activity", e))
}

/// Removes the member assigned to an activity.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if the client call fails.
pub async fn unassign_activity_member(
    api: &WorkflowApi,
    activity_id: &str,
) -> Result<Value, OperationError> {
    api.unassign_activity_member(activity_id)
        .await
        .map_err(|e| OperationError::failed("Error unassigning member from activity", e))
}
