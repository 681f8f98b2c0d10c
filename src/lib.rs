//! # Pulse API Rust SDK
//!
//! A typed Rust client for the Pulse people-management REST API: people,
//! accounts, the talent family (talents, skills, languages, educations,
//! certifications, experiences) and workflow activities.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PulseConfig`] and [`PulseConfigBuilder`]
//! - A request executor ([`clients::HttpClient`]) that injects the bearer
//!   credential and maps non-2xx responses to typed errors
//! - JSON:API envelopes and list options in [`rest`]
//! - Per-resource clients and a name-based [`api::ClientFactory`]
//! - Operation handlers that add context to failures in [`operations`]
//!
//! ## Quick Start
//!
//! ```rust
//! use pulse_api::{PulseConfig, ApiToken, BaseUrl};
//!
//! let config = PulseConfig::builder()
//!     .base_url(BaseUrl::new("https://pulse.example.com").unwrap())
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Resource Clients
//!
//! ```rust,ignore
//! use pulse_api::api::PeopleApi;
//! use pulse_api::rest::{Document, ListParams, ResourceKind};
//! use serde_json::json;
//!
//! let people = PeopleApi::new(&config)?;
//!
//! // GET /api/v3/iam/people/123?included=account
//! let person = people.get_person_by_id("123", &["account"]).await?;
//!
//! // POST /api/v3/iam/people
//! let created = people
//!     .create_person(&Document::new(ResourceKind::People, json!({"firstName": "Ada"})))
//!     .await?;
//! ```
//!
//! ## Dispatch by Resource Name
//!
//! ```rust,ignore
//! use pulse_api::api::ClientFactory;
//! use pulse_api::operations::{execute, Operation};
//! use pulse_api::rest::{ListParams, ResourceKind};
//!
//! let client = ClientFactory::new().create_client(Some(&config), Some("skill"))?;
//! let skills = execute(
//!     &client,
//!     Operation::List { resource: ResourceKind::Skill, params: ListParams::new() },
//! )
//! .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Credentials are instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and envelopes validate before sending
//! - **One call, one request**: No retries, caching, or client reuse between calls
//! - **Pass-through results**: Response bodies are returned as parsed JSON, unmodified

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod operations;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, BaseUrl, PulseConfig, PulseConfigBuilder, PulseCredentials};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    AuthenticationError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, QueryParams, RequestError,
};

// Re-export resource clients
pub use api::{
    AccountApi, ActivityAssignment, ClientFactory, PeopleApi, PulseApi, PulseClient, TalentApi,
    WorkflowApi,
};
pub use operations::{execute, Operation, OperationError, PersonFields};
pub use rest::{Document, ListParams, ResourceError, ResourceKind};
