//! NMS Assistant tools.

mod endpoint;
mod nms_tool;

pub use endpoint::NmsEndpoint;
pub use nms_tool::{NmsTool, OPERATION_FAILED};
