//! Common types used across wingskills.

mod common;

pub use common::*;
