//! Resource-name to client dispatch.
//!
//! [`ClientFactory`] maps the resource identifier a host works with
//! (`"people"`, `"skill"`, `"activity"`, ...) to the matching client. Names
//! it does not know, including an empty or absent one, produce the generic
//! client so ad-hoc calls remain possible.
//!
//! # Example
//!
//! ```rust
//! use pulse_api::api::{ClientFactory, PulseClient};
//! use pulse_api::{ApiToken, BaseUrl, PulseConfig};
//!
//! let config = PulseConfig::builder()
//!     .base_url(BaseUrl::new("https://pulse.example.com").unwrap())
//!     .api_token(ApiToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let factory = ClientFactory::new();
//! let client = factory.create_client(Some(&config), Some("skill")).unwrap();
//! assert!(matches!(client, PulseClient::Talent(_)));
//!
//! let fallback = factory.create_client(Some(&config), Some("foo")).unwrap();
//! assert!(matches!(fallback, PulseClient::Generic(_)));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::api::{AccountApi, PeopleApi, PulseApi, TalentApi, WorkflowApi};
use crate::clients::{AuthenticationError, HttpError};
use crate::config::PulseConfig;

/// A client produced by [`ClientFactory`].
#[derive(Clone, Debug)]
pub enum PulseClient {
    /// People client.
    People(PeopleApi),
    /// Account client.
    Account(AccountApi),
    /// Talent family client.
    Talent(TalentApi),
    /// Workflow activity client.
    Workflow(WorkflowApi),
    /// Generic client exposing only raw requests and kind-parameterized CRUD.
    Generic(PulseApi),
}

impl PulseClient {
    /// Returns the generic client underneath any variant.
    #[must_use]
    pub fn api(&self) -> &PulseApi {
        match self {
            Self::People(client) => &**client,
            Self::Account(client) => &**client,
            Self::Talent(client) => &**client,
            Self::Workflow(client) => &**client,
            Self::Generic(api) => api,
        }
    }

    /// Returns a short name for the variant, used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::People(_) => "people",
            Self::Account(_) => "account",
            Self::Talent(_) => "talent",
            Self::Workflow(_) => "workflow",
            Self::Generic(_) => "generic",
        }
    }
}

/// Constructor stored in the factory's registration table.
pub type ClientConstructor = fn(PulseApi) -> PulseClient;

/// Builds resource clients bound to a credential.
///
/// Every call to [`create_client`](Self::create_client) builds a fresh
/// client; nothing is cached between calls.
#[derive(Clone)]
pub struct ClientFactory {
    registry: HashMap<String, ClientConstructor>,
}

impl fmt::Debug for ClientFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ClientFactory")
            .field("registered", &names)
            .finish()
    }
}

// Verify ClientFactory is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientFactory>();
};

fn people(api: PulseApi) -> PulseClient {
    PulseClient::People(PeopleApi::from_api(api))
}

fn account(api: PulseApi) -> PulseClient {
    PulseClient::Account(AccountApi::from_api(api))
}

fn talent(api: PulseApi) -> PulseClient {
    PulseClient::Talent(TalentApi::from_api(api))
}

fn workflow(api: PulseApi) -> PulseClient {
    PulseClient::Workflow(WorkflowApi::from_api(api))
}

impl Default for ClientFactory {
    fn default() -> Self {
        let defaults: [(&str, ClientConstructor); 11] = [
            ("people", people),
            ("account", account),
            ("accountRole", account),
            ("talent", talent),
            ("skill", talent),
            ("language", talent),
            ("education", talent),
            ("certification", talent),
            ("experience", talent),
            ("workflow", workflow),
            ("activity", workflow),
        ];

        Self {
            registry: defaults
                .into_iter()
                .map(|(name, constructor)| (name.to_string(), constructor))
                .collect(),
        }
    }
}

impl ClientFactory {
    /// Creates a factory with the default registrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the constructor used for `name`.
    pub fn register(&mut self, name: impl Into<String>, constructor: ClientConstructor) {
        self.registry.insert(name.into(), constructor);
    }

    /// Returns `true` if `name` has a registered constructor.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Builds the client registered for `resource`, bound to `config`.
    ///
    /// Unknown, empty and absent resource names yield
    /// [`PulseClient::Generic`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::MissingCredentials`] when `config` is
    /// `None`, and [`HttpError::Transport`] if the HTTP client cannot be
    /// created.
    pub fn create_client(
        &self,
        config: Option<&PulseConfig>,
        resource: Option<&str>,
    ) -> Result<PulseClient, HttpError> {
        let config = config.ok_or(AuthenticationError::MissingCredentials)?;
        let api = PulseApi::new(config)?;

        match resource.and_then(|name| self.registry.get(name)) {
            Some(constructor) => Ok(constructor(api)),
            None => {
                tracing::debug!(resource = ?resource, "No client registered, using generic client");
                Ok(PulseClient::Generic(api))
            }
        }
    }
}
