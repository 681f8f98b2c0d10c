//! Client for `workflow/activities`, including member assignment.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::PulseApi;
use crate::clients::HttpMethod;
use crate::rest::{Document, ListParams, ResourceError, ResourceKind};

const KIND: ResourceKind = ResourceKind::Activity;
const ASSIGNMENTS: &str = "assignments";

/// Body of an activity member assignment.
///
/// Serialized with snake_case keys, which is what the assignments endpoint
/// expects (unlike the camelCase JSON:API attributes elsewhere).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAssignment {
    /// The account to assign.
    pub account_id: String,
    /// Whether the member starts working on the activity immediately.
    #[serde(default)]
    pub start_working: bool,
}

impl ActivityAssignment {
    /// Creates an assignment for `account_id`.
    #[must_use]
    pub fn new(account_id: impl Into<String>, start_working: bool) -> Self {
        Self {
            account_id: account_id.into(),
            start_working,
        }
    }
}

/// Workflow activities under `/api/v3/workflow/activities`.
///
/// Dereferences to [`PulseApi`] for raw requests.
#[derive(Clone, Debug)]
pub struct WorkflowApi {
    api: PulseApi,
}

impl WorkflowApi {
    /// Creates a workflow client bound to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`](crate::clients::HttpError::Transport)
    /// if the HTTP client cannot be created.
    pub fn new(config: &crate::PulseConfig) -> Result<Self, crate::clients::HttpError> {
        Ok(Self::from_api(PulseApi::new(config)?))
    }

    /// Wraps a generic client.
    #[must_use]
    pub const fn from_api(api: PulseApi) -> Self {
        Self { api }
    }

    /// Lists activities.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_activity_list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        self.api.list(KIND, params).await
    }

    /// Fetches an activity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn get_activity_by_id(
        &self,
        activity_id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        self.api.find(KIND, activity_id, included).await
    }

    /// Creates an activity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed envelope or a failed request.
    pub async fn create_activity<A: Serialize + Sync>(
        &self,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.create(KIND, document).await
    }

    /// Updates an activity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed request or a failed request.
    pub async fn update_activity_by_id<A: Serialize + Sync>(
        &self,
        activity_id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.update(KIND, activity_id, document).await
    }

    /// Deletes an activity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn delete_activity_by_id(&self, activity_id: &str) -> Result<Value, ResourceError> {
        self.api.delete(KIND, activity_id).await
    }

    /// Assigns a member to an activity.
    ///
    /// Sends `POST /api/v3/workflow/activities/{id}/assignments`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] for a blank activity id and
    /// [`ResourceError::Http`] if the request fails.
    pub async fn assign_activity_member(
        &self,
        activity_id: &str,
        assignment: &ActivityAssignment,
    ) -> Result<Value, ResourceError> {
        let path = KIND.sub_path(activity_id, ASSIGNMENTS)?;
        let body = serde_json::to_value(assignment)?;
        tracing::debug!(activity_id, account_id = %assignment.account_id, "Assigning activity member");

        Ok(self
            .api
            .request(HttpMethod::Post, &path, Some(body), None)
            .await?)
    }

    /// Removes the member assigned to an activity.
    ///
    /// Sends `DELETE /api/v3/workflow/activities/{id}/assignments`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] for a blank activity id and
    /// [`ResourceError::Http`] if the request fails.
    pub async fn unassign_activity_member(
        &self,
        activity_id: &str,
    ) -> Result<Value, ResourceError> {
        let path = KIND.sub_path(activity_id, ASSIGNMENTS)?;

        Ok(self
            .api
            .request(HttpMethod::Delete, &path, None, None)
            .await?)
    }
}

impl Deref for WorkflowApi {
    type Target = PulseApi;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
