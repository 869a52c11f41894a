//! 核心模块：响应结构、状态接口与错误类型

pub mod error;
pub mod response;
pub mod status;

pub use error::CoreError;
pub use response::ApiResponse;
pub use status::{CommonStatus, RespStatus};
