//! Registries for loaded skills and the tools they expose.

mod base;
mod extension;
mod tool;

pub use base::{BaseRegistry, Registerable};
pub use extension::ExtensionRegistry;
pub use tool::ToolRegistry;
