//! 日志基础设施

use tracing::Level;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::config::{ConfigError, LogConfig};

/// 日志初始化错误
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("日志配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 当前进程已经安装过全局 subscriber
    #[error("日志初始化失败: {0}")]
    Subscriber(#[from] TryInitError),
}

pub struct Logger;

impl Logger {
    /// 以固定级别初始化，已经初始化过时静默忽略
    pub fn init(level: Level) {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .finish()
            .try_init();
    }

    /// 按配置初始化，`RUST_LOG` 会覆盖配置里的级别
    pub fn try_init(config: &LogConfig) -> Result<(), LoggerError> {
        let filter = config.env_filter()?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .with_ansi(config.ansi)
            .finish()
            .try_init()?;

        tracing::debug!(level = %config.level, "日志已初始化");
        Ok(())
    }
}
