//! 基础设施：日志与配置

pub mod config;
pub mod logger;

pub use config::{ConfigError, LogConfig};
pub use logger::{Logger, LoggerError};
