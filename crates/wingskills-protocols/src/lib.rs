//! # Wingskills Protocols
//!
//! Core protocol definitions (traits) for wingskills.
//! Contains only interface definitions and the small value types they share.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Base trait for skills loaded by a host
//! - [`Tool`] - Trait for LLM-callable tool functions
//! - [`DiagnosticSink`] - Collaborator receiving verbose skill diagnostics

pub mod diagnostics;
pub mod error;
pub mod extension;
pub mod tool;
pub mod types;

// Re-export core traits
pub use diagnostics::{DiagnosticSink, Diagnostics, LogLevel, MemorySink, TracingSink};
pub use error::{ExtensionError, ToolError};
pub use extension::{Extension, ExtensionContext, ExtensionManifest};
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use types::*;
