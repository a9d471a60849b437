//! Extension protocol definitions.
//!
//! Every skill is an extension: it is initialized once by the host with its
//! configuration and registers the tools it exposes.

mod context;
mod manifest;
mod traits;

pub use context::*;
pub use manifest::*;
pub use traits::*;
