//! HTTP client for Pulse API communication.
//!
//! This module provides the [`HttpClient`] type, the single point where
//! requests leave the process. Every call issues exactly one HTTP request;
//! there is no retry, backoff, or caching.

use std::collections::HashMap;

use crate::clients::errors::{AuthenticationError, HttpError, RequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, PulseConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated requests to the Pulse API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and the bearer token
/// - Response body parsing
/// - Mapping non-2xx responses to typed errors
///
/// `HttpClient` is `Send + Sync` and cheap to clone.
///
/// # Example
///
/// ```rust,ignore
/// use pulse_api::{PulseConfig, ApiToken, BaseUrl};
/// use pulse_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = PulseConfig::builder()
///     .base_url(BaseUrl::new("https://pulse.example.com")?)
///     .api_token(ApiToken::new("token")?)
///     .build()?;
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/v3/iam/people").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://pulse.example.com`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client bound to the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &PulseConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Pulse API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_token().as_ref()),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL a request would be sent to.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        self.base_url.join(&request.path_and_query())
    }

    /// Sends an HTTP request to the Pulse API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Transport`)
    /// - The API answers 401 (`Authentication`)
    /// - Any other non-2xx response is received (`Request`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = self.client.request(request.http_method.to_reqwest(), &url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            query = %request.query.to_query_string(),
            "Sending Pulse API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let response = HttpResponse::new(code, res_headers, HttpResponse::parse_body(&body_text));

        tracing::debug!(status = code, path = %request.path, "Received Pulse API response");

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            status = code,
            method = %request.http_method,
            path = %request.path,
            request_id = response.request_id().unwrap_or_default(),
            "Pulse API request failed"
        );

        if code == 401 {
            return Err(HttpError::Authentication(AuthenticationError::Rejected {
                status: code,
                body: response.body,
            }));
        }

        Err(HttpError::Request(RequestError {
            status: code,
            request_id: response.request_id().map(String::from),
            body: response.body,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::config::ApiToken;

    fn create_test_config() -> PulseConfig {
        PulseConfig::builder()
            .base_url(BaseUrl::new("https://pulse.example.com/").unwrap())
            .api_token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_url(), "https://pulse.example.com");
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Pulse API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = PulseConfig::builder()
            .base_url(BaseUrl::new("https://pulse.example.com").unwrap())
            .api_token(ApiToken::new("t").unwrap())
            .user_agent_prefix("Workflow/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Workflow/1.0 | "));
    }

    #[test]
    fn test_url_for_joins_base_path_and_query() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "/api/v3/iam/people/123")
            .query_param("included", "account")
            .build()
            .unwrap();

        assert_eq!(
            client.url_for(&request),
            "https://pulse.example.com/api/v3/iam/people/123?included=account"
        );
    }
}
