//! The generic Pulse API client.
//!
//! [`PulseApi`] exposes the raw executor-backed [`PulseApi::request`] for
//! ad-hoc calls plus typed CRUD helpers over any [`ResourceKind`]. The
//! resource-specific clients are thin named wrappers around it.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, QueryParams};
use crate::config::PulseConfig;
use crate::rest::{included_query, Document, ListParams, ResourceError, ResourceKind};

/// Generic client bound to one credential.
///
/// Cloning is cheap; the underlying connection pool is shared.
///
/// # Example
///
/// ```rust,ignore
/// use pulse_api::api::PulseApi;
/// use pulse_api::clients::HttpMethod;
///
/// let api = PulseApi::new(&config)?;
/// let body = api.request(HttpMethod::Get, "/custom", None, None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PulseApi {
    http_client: HttpClient,
}

// Verify PulseApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PulseApi>();
};

impl PulseApi {
    /// Creates a client bound to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &PulseConfig) -> Result<Self, HttpError> {
        Ok(Self::from_http_client(HttpClient::new(config)?))
    }

    /// Wraps an existing HTTP client.
    #[must_use]
    pub const fn from_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a raw request and returns the parsed response body unchanged.
    ///
    /// `path` is relative to the configured base URL and must start with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is malformed, the transport
    /// fails, or the API answers with a non-2xx status.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<QueryParams>,
    ) -> Result<Value, HttpError> {
        let mut builder = HttpRequest::builder(method, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        let request = builder.build()?;

        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }

    /// Lists resources of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub async fn list(
        &self,
        kind: ResourceKind,
        params: Option<&ListParams>,
    ) -> Result<Value, ResourceError> {
        let query = params.map(ListParams::to_query).filter(|q| !q.is_empty());
        tracing::debug!(resource = %kind, "Listing resources");

        Ok(self
            .request(HttpMethod::Get, kind.collection_path(), None, query)
            .await?)
    }

    /// Fetches one resource of `kind`, side-loading the `included` relations.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] for a blank id and
    /// [`ResourceError::Http`] if the request fails.
    pub async fn find(
        &self,
        kind: ResourceKind,
        id: &str,
        included: &[&str],
    ) -> Result<Value, ResourceError> {
        let path = kind.member_path(id)?;
        let query = Some(included_query(included)).filter(|q| !q.is_empty());

        Ok(self.request(HttpMethod::Get, &path, None, query).await?)
    }

    /// Creates a resource of `kind` from a JSON:API document.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::TypeMismatch`] or [`ResourceError::UnexpectedId`]
    /// for a malformed envelope and [`ResourceError::Http`] if the request fails.
    pub async fn create<A: Serialize + Sync>(
        &self,
        kind: ResourceKind,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        let body = document.to_untyped()?.into_create_body(kind)?;

        Ok(self
            .request(HttpMethod::Post, kind.collection_path(), Some(body), None)
            .await?)
    }

    /// Updates the resource of `kind` identified by `id`.
    ///
    /// The envelope id is filled in from `id` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`], [`ResourceError::TypeMismatch`] or
    /// [`ResourceError::IdMismatch`] for a malformed request and
    /// [`ResourceError::Http`] if the request fails.
    pub async fn update<A: Serialize + Sync>(
        &self,
        kind: ResourceKind,
        id: &str,
        document: &Document<A>,
    ) -> Result<Value, ResourceError> {
        let path = kind.member_path(id)?;
        let body = document.to_untyped()?.into_update_body(kind, id)?;

        Ok(self
            .request(HttpMethod::Patch, &path, Some(body), None)
            .await?)
    }

    /// Deletes the resource of `kind` identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] for a blank id and
    /// [`ResourceError::Http`] if the request fails.
    pub async fn delete(&self, kind: ResourceKind, id: &str) -> Result<Value, ResourceError> {
        let path = kind.member_path(id)?;

        Ok(self.request(HttpMethod::Delete, &path, None, None).await?)
    }
}
