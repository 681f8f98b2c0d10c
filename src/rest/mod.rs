//! REST resource infrastructure for the Pulse API.
//!
//! - [`ResourceKind`]: The resource catalogue (type strings and base paths)
//! - [`ResourceOperation`]: CRUD operations and their HTTP methods
//! - [`Document`]: JSON:API envelopes for create/update payloads
//! - [`ListParams`]: Filtering, sorting, pagination and inclusion options
//! - [`ResourceError`]: Errors raised while building or sending resource requests

mod envelope;
mod errors;
mod path;
mod query;

pub use envelope::{Document, ResourceObject};
pub use errors::ResourceError;
pub use path::{ResourceKind, ResourceOperation};
pub use query::{included_query, AdditionalFields, FieldSet, Filter, ListParams};
