//! Resource clients for the Pulse API.
//!
//! - [`PulseApi`]: The generic client (raw requests plus CRUD over any [`ResourceKind`](crate::rest::ResourceKind))
//! - [`PeopleApi`], [`AccountApi`], [`TalentApi`], [`WorkflowApi`]: Named per-resource clients
//! - [`ClientFactory`]: Maps a resource name to a [`PulseClient`]

mod account;
mod base;
mod factory;
mod people;
mod talent;
mod workflow;

pub use account::AccountApi;
pub use base::PulseApi;
pub use factory::{ClientConstructor, ClientFactory, PulseClient};
pub use people::PeopleApi;
pub use talent::TalentApi;
pub use workflow::{ActivityAssignment, WorkflowApi};
