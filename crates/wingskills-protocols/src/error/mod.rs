//! Error types for the wingskills protocol layer.

mod extension;
mod tool;

pub use extension::*;
pub use tool::*;
