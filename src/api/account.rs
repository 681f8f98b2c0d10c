//! Client for `iam/accounts`.

use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use crate::api::PulseApi;
use crate::rest::{Document, ListParams, ResourceError, ResourceKind};

const KIND: ResourceKind = ResourceKind::Account;

/// User accounts under `/api/v3/iam/accounts`.
///
/// Dereferences to [`PulseApi`] for raw requests.
#[derive(Clone, Debug)]
pub struct AccountApi {
    api: PulseApi,
}

impl AccountApi {
    /// Creates an account client bound to `config`.
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

    /// Lists accounts.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_account_list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        self.api.list(KIND, params).await
    }

    /// Fetches an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn get_account_by_id(
        &self,
        account_id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        self.api.find(KIND, account_id, included).await
    }

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed envelope or a failed request.
    pub async fn create_account<A: Serialize + Sync>(
        &self,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.create(KIND, document).await
    }

    /// Updates an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a malformed request or a failed request.
    pub async fn update_account_by_id<A: Serialize + Sync>(
        &self,
        account_id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        self.api.update(KIND, account_id, document).await
    }

    /// Deletes an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for a blank id or a failed request.
    pub async fn delete_account_by_id(&self, account_id: &str) -> Result<Value, ResourceError> {
        self.api.delete(KIND, account_id).await
    }
}

impl Deref for AccountApi {
    type Target = PulseApi;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
