//! Client for `iam/people`.

use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use crate::api::PulseApi;
use crate::rest::{Document, ListParams, ResourceError, ResourceKind};

const KIND: ResourceKind = ResourceKind::People;

/// People records under `/api/v3/iam/people`.
///
/// Dereferences to [`PulseApi`] for raw requests.
///
/// # Example
///
/// ```rust,ignore
/// let people = PeopleApi::new(&config)?;
/// let person = people.get_person_by_id("123", &["account"]).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PeopleApi {
    api: PulseApi,
}

impl PeopleApi {
    /// Creates a people client bound to `config`.
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

    /// Lists people.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_people_list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        self.api.list(KIND, params).await
    }

    /// Fetches a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn get_person_by_id(
        &self,
        person_id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        self.api.find(KIND, person_id, included).await
    }

    /// Creates a person.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed envelope or a failed request.
    pub async fn create_person<A: Serialize + Sync>(
        &self,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.create(KIND, document).await
    }

    /// Updates a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed request or a failed request.
    pub async fn update_person_by_id<A: Serialize + Sync>(
        &self,
        person_id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.update(KIND, person_id, document).await
    }

    /// Deletes a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn delete_person_by_id(&self, person_id: &str) -> Result<Value, ResourceError> {
        self.api.delete(KIND, person_id).await
    }
}

impl Deref for PeopleApi {
    type Target = PulseApi;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
