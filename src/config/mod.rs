//! Configuration types for the Pulse API SDK.
//!
//! # Overview
//!
//! - [`PulseConfig`]: The connection credential (base URL and API token)
//! - [`PulseConfigBuilder`]: A builder for constructing [`PulseConfig`] instances
//! - [`PulseCredentials`]: The raw credential bag handed over by a host, convertible
//!   into a [`PulseConfig`]
//! - [`ApiToken`]: A validated API token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use pulse_api::{PulseConfig, ApiToken, BaseUrl};
//!
//! let config = PulseConfig::builder()
//!     .base_url(BaseUrl::new("https://pulse.example.com").unwrap())
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl};

use serde::Deserialize;

use crate::error::ConfigError;

/// Connection settings for the Pulse API.
///
/// A `PulseConfig` is immutable once built. Clients take a reference at
/// construction and keep their own copy for their whole lifetime, so there is
/// no shared or global credential state.
#[derive(Clone, Debug)]
pub struct PulseConfig {
    base_url: BaseUrl,
    api_token: ApiToken,
    user_agent_prefix: Option<String>,
}

impl PulseConfig {
    /// Creates a new builder for constructing a `PulseConfig`.
    #[must_use]
    pub fn builder() -> PulseConfigBuilder {
        PulseConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PulseConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PulseConfig>();
};

/// Builder for constructing [`PulseConfig`] instances.
///
/// `base_url` and `api_token` are required.
#[derive(Debug, Default)]
pub struct PulseConfigBuilder {
    base_url: Option<BaseUrl>,
    api_token: Option<ApiToken>,
    user_agent_prefix: Option<String>,
}

impl PulseConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PulseConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_token` are not set.
    pub fn build(self) -> Result<PulseConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(PulseConfig {
            base_url,
            api_token,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// Raw credential bag as stored by a workflow host.
///
/// Hosts usually keep credentials as loosely-typed JSON. This struct accepts
/// both camelCase and snake_case keys and is validated when converted into a
/// [`PulseConfig`].
///
/// # Example
///
/// ```rust
/// use pulse_api::{PulseConfig, PulseCredentials};
///
/// let credentials: PulseCredentials = serde_json::from_str(
///     r#"{"baseUrl": "https://pulse.example.com", "apiKey": "secret"}"#,
/// ).unwrap();
/// let config = PulseConfig::try_from(credentials).unwrap();
/// assert_eq!(config.base_url().as_ref(), "https://pulse.example.com");
/// ```
#[derive(Clone, Default, Deserialize)]
pub struct PulseCredentials {
    /// The API base URL.
    #[serde(default, alias = "baseUrl", alias = "url")]
    pub base_url: Option<String>,
    /// The API key or token.
    #[serde(default, alias = "apiKey", alias = "api_token", alias = "apiToken")]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for PulseCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PulseCredentials")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "*****"))
            .finish()
    }
}

impl TryFrom<PulseCredentials> for PulseConfig {
    type Error = ConfigError;

    fn try_from(credentials: PulseCredentials) -> Result<Self, Self::Error> {
        let base_url = credentials
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_key = credentials
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Self::builder()
            .base_url(BaseUrl::new(base_url)?)
            .api_token(ApiToken::new(api_key)?)
            .build()
    }
}
