//! HTTP client types for Pulse API communication.
//!
//! This module is the request executor: it builds the outbound request from
//! a method, path, optional JSON body and query parameters, injects the
//! credential, performs the call, and returns the parsed body or a
//! structured error.
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request descriptor
//! - [`HttpResponse`]: A parsed response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`QueryParams`]: Ordered query parameters with repeated keys
//!
//! # Example
//!
//! ```rust,ignore
//! use pulse_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "/api/v3/iam/people")
//!     .query_param("page[size]", "25")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{AuthenticationError, HttpError, InvalidHttpRequestError, RequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams};
pub use http_response::HttpResponse;
