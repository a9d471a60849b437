//! API request tool implementations.

mod send_api_request;

pub use send_api_request::{SendApiRequestTool, TOOL_ID};
