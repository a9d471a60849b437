//! Retry envelope with exponential backoff.

use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::executor::RequestFailure;

/// A failed API request together with its retry budget.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiRequestError {
    pub message: String,
    pub status_code: Option<u16>,
    pub response_body: Option<String>,
    pub retry_count: u32,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl ApiRequestError {
    pub fn new(message: impl Into<String>, max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            response_body: None,
            retry_count: 0,
            max_retries,
            retry_delay,
        }
    }

    /// Attach the HTTP status, prefixing the message for 400, 401 and 404.
    pub fn with_status(mut self, status_code: u16) -> Self {
        let prefix = match status_code {
            400 => "Bad Request: ",
            401 => "Unauthorized: ",
            404 => "Not Found: ",
            _ => "",
        };
        self.message = format!("{}{}", prefix, self.message);
        self.status_code = Some(status_code);
        self
    }

    pub fn with_response_body(mut self, body: impl Into<String>) -> Self {
        self.response_body = Some(body.into());
        self
    }

    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Wrap a retryable failure. Timeouts and unexpected failures give `None`.
    pub fn from_failure(
        failure: &RequestFailure,
        max_retries: u32,
        retry_delay: Duration,
    ) -> Option<Self> {
        match failure {
            RequestFailure::Status {
                status,
                detail,
                body,
            } => Some(
                Self::new(detail.clone(), max_retries, retry_delay)
                    .with_status(*status)
                    .with_response_body(body.clone()),
            ),
            RequestFailure::Transport(detail) => {
                Some(Self::new(detail.clone(), max_retries, retry_delay))
            }
            RequestFailure::Timeout | RequestFailure::Unexpected(_) => None,
        }
    }

    /// Report message, status and body at error severity.
    pub fn log_error(&self) {
        error!(
            status_code = ?self.status_code,
            response_body = self.response_body.as_deref().unwrap_or(""),
            "API Request Error: {}",
            self.message
        );
    }

    /// Wait out the next backoff step if budget remains.
    ///
    /// Returns `true` when the caller should repeat the request.
    pub async fn retry_request(&mut self) -> bool {
        if self.retry_count >= self.max_retries {
            warn!("Maximum retry attempts reached. Unable to complete the request.");
            return false;
        }

        self.retry_count += 1;
        let delay = calculate_retry_delay(self.retry_delay, self.retry_count);
        info!(
            "Retrying the API request (Attempt {}/{})...",
            self.retry_count, self.max_retries
        );
        info!("Waiting for {:.2} seconds before retrying...", delay.as_secs_f64());
        tokio::time::sleep(delay).await;
        true
    }
}

/// Backoff for attempt `retry_count` (1-based): `base * 2^(n-1)` plus up to
/// 10% random jitter.
pub fn calculate_retry_delay(base: Duration, retry_count: u32) -> Duration {
    let exponent = retry_count.saturating_sub(1).min(30) as i32;
    let delay = base.as_secs_f64() * 2f64.powi(exponent);
    let jitter = rand::random::<f64>() * 0.1 * delay;
    Duration::try_from_secs_f64(delay + jitter).unwrap_or(Duration::MAX)
}
