//! # 统一 Web 响应结构
//!
//! 这个库为 Web 后端提供统一的响应包装：
//! - [`ApiResponse<T>`]：携带 `code`、`msg` 和可选 `data` 的响应结构
//! - [`RespStatus`]：状态码 + 消息接口，业务状态枚举实现它即可填充响应
//! - [`define_resp_status!`]：声明状态枚举的宏，内置 [`CommonStatus`]
//! - [`CoreError`]：处理器错误，渲染为同样格式的响应体
//! - [`infrastructure`]：日志初始化和日志配置
//!
//! ```
//! use web_common::{ApiResponse, CommonStatus};
//!
//! let resp = ApiResponse::full(200, "created", serde_json::json!({ "id": 7 }));
//! assert_eq!(
//!     serde_json::to_string(&resp).unwrap(),
//!     r#"{"code":200,"msg":"created","data":{"id":7}}"#
//! );
//!
//! let not_found: ApiResponse<()> = ApiResponse::from_status(&CommonStatus::NotFound);
//! assert!(!not_found.is_success());
//! ```

pub mod core;
pub mod infrastructure;

pub use crate::core::{ApiResponse, CommonStatus, CoreError, RespStatus};
pub use crate::infrastructure::{ConfigError, LogConfig, Logger, LoggerError};

/// 处理器结果类型
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
