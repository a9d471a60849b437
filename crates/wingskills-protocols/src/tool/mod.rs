//! Tool protocol definitions.
//!
//! Tools are the functions a skill exposes to the LLM dispatcher.

mod context;
mod definition;
mod result;
mod traits;

pub use context::*;
pub use definition::*;
pub use result::*;
pub use traits::*;
