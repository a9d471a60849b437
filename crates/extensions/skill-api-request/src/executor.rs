//! HTTP execution and outcome classification.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, Method};
use thiserror::Error;
use url::Url;

use crate::headers::has_header;
use crate::normalize::NormalizedRequest;

/// Verbs the executor accepts, after upper-casing.
const SUPPORTED_METHODS: &[&str] = &[
    "GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS", "TRACE", "CONNECT",
];

/// Why a request produced no usable response.
///
/// The display text is exactly what the LLM receives.
#[derive(Debug, Error)]
pub enum RequestFailure {
    /// The server answered with a 4xx or 5xx status.
    #[error("Error, could not complete API request. Exception was: {detail}.")]
    Status {
        status: u16,
        detail: String,
        body: String,
    },

    /// Connection, DNS, protocol or URL problems.
    #[error("Error, could not complete API request. Exception was: {0}.")]
    Transport(String),

    #[error("Error, could not complete API request.  Timed out.")]
    Timeout,

    /// Anything else, such as missing arguments or an unknown verb.
    #[error("Error, could not complete API request.  Reason was {0}.")]
    Unexpected(String),
}

impl RequestFailure {
    fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RequestFailure::Timeout
        } else if e.is_builder() {
            RequestFailure::Unexpected(e.to_string())
        } else {
            RequestFailure::Transport(e.to_string())
        }
    }

    /// Short cause for diagnostics.
    pub fn reason(&self) -> &str {
        match self {
            RequestFailure::Status { detail, .. } => detail,
            RequestFailure::Transport(detail) | RequestFailure::Unexpected(detail) => detail,
            RequestFailure::Timeout => "timeout",
        }
    }

    /// Status and transport failures may succeed when repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RequestFailure::Status { .. } | RequestFailure::Transport(_)
        )
    }
}

/// A request whose method and URL have been checked.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub params: BTreeMap<String, String>,
    pub payload: Option<String>,
}

impl PreparedRequest {
    /// Combine the target with a normalized request and its serialized body.
    ///
    /// GET and HEAD requests carry no payload when the body is empty. Any
    /// payload that is sent defaults to `Content-Type: application/json`.
    pub fn new(
        method: &str,
        url: &str,
        normalized: NormalizedRequest,
        payload: String,
    ) -> Result<Self, RequestFailure> {
        let verb = method.trim().to_ascii_uppercase();
        if !SUPPORTED_METHODS.contains(&verb.as_str()) {
            return Err(RequestFailure::Unexpected(format!(
                "unsupported HTTP method '{}'",
                method
            )));
        }
        let method = Method::from_bytes(verb.as_bytes())
            .map_err(|e| RequestFailure::Unexpected(e.to_string()))?;

        let url = Url::parse(url.trim())
            .map_err(|e| RequestFailure::Transport(format!("Invalid URL '{}': {}", url, e)))?;

        let NormalizedRequest {
            mut headers,
            params,
            body,
        } = normalized;

        let payload = if body.is_empty() && (method == Method::GET || method == Method::HEAD) {
            None
        } else {
            if !has_header(&headers, "Content-Type") {
                headers.insert("Content-Type".to_string(), "application/json".to_string());
            }
            Some(payload)
        };

        Ok(Self {
            method,
            url,
            headers,
            params,
            payload,
        })
    }
}

/// Issues prepared requests under a fixed timeout.
pub struct HttpExecutor {
    client: Client,
    timeout: Duration,
}

impl HttpExecutor {
    /// Create an executor whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wingskills/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send `request` once and return the response body.
    ///
    /// The timeout covers connecting, the response head and reading the
    /// body. Statuses of 400 and above are failures.
    pub async fn execute(&self, request: &PreparedRequest) -> Result<String, RequestFailure> {
        match tokio::time::timeout(self.timeout, self.send(request)).await {
            Ok(result) => result,
            Err(_) => Err(RequestFailure::Timeout),
        }
    }

    async fn send(&self, request: &PreparedRequest) -> Result<String, RequestFailure> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());

        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(payload) = &request.payload {
            builder = builder.body(payload.clone());
        }

        let response = builder.send().await.map_err(RequestFailure::from_reqwest)?;

        let status_error = response.error_for_status_ref().err().map(|e| e.to_string());
        if let Some(detail) = status_error {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestFailure::Status {
                status,
                detail,
                body,
            });
        }

        response.text().await.map_err(RequestFailure::from_reqwest)
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
