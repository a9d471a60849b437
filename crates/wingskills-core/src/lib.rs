//! # Wingskills Core
//!
//! Host side of the skill protocol.
//!
//! ## Components
//!
//! - [`SkillHost`] - Loads skills and dispatches tool invocations
//! - Registries for tools and loaded skills

pub mod host;
pub mod registry;

pub use host::SkillHost;
pub use registry::{ExtensionRegistry, ToolRegistry};
