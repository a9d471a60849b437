//! API request skill for wingskills.
//!
//! Exposes `send_api_request`, which lets the LLM issue an arbitrary HTTP
//! request and read back the response text.
//!
//! ## Pipeline
//!
//! 1. [`normalize`] turns the loosely-typed argument object into headers,
//!    query parameters and a body mapping, optionally merging
//!    [`DEFAULT_HEADERS`].
//! 2. [`serialize_body`] renders the body as compact JSON.
//! 3. [`HttpExecutor`] issues the request under a timeout and classifies the
//!    outcome as a [`RequestFailure`].
//! 4. [`ApiRequestError`] optionally retries with exponential backoff.

mod body;
mod executor;
mod extension;
mod headers;
mod normalize;
mod retry;
mod settings;
mod tools;

pub use body::serialize_body;
pub use executor::{HttpExecutor, PreparedRequest, RequestFailure};
pub use extension::ApiRequestExtension;
pub use headers::{merge_default_headers, DEFAULT_HEADERS};
pub use normalize::{normalize, NormalizedRequest};
pub use retry::{calculate_retry_delay, ApiRequestError};
pub use settings::ApiRequestSettings;
pub use tools::{SendApiRequestTool, TOOL_ID};
