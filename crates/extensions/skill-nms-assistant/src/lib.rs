//! No Man's Sky assistant skill for wingskills.
//!
//! Thin client for the public NMS Assistant REST API. Each endpoint is one
//! tool; recipe lookups also resolve the item names their `appId`s refer to.

mod client;
mod error;
mod extension;
mod recipes;
mod settings;
mod tools;

pub use client::NmsClient;
pub use error::NmsError;
pub use extension::NmsAssistantExtension;
pub use recipes::{extract_app_ids, with_name_key};
pub use settings::NmsSettings;
pub use tools::{NmsEndpoint, NmsTool, OPERATION_FAILED};
