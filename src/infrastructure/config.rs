//! 日志配置

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 日志配置
///
/// 可以单独放在一个 toml 文件里，也可以作为宿主配置的一个字段反序列化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// 日志级别，或完整的 `EnvFilter` 指令（如 `"info,web_common=debug"`）
    pub level: String,
    /// 是否输出 target
    pub with_target: bool,
    /// 是否输出 ANSI 颜色
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LogConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.trim();
        if level.is_empty() {
            return Err(ConfigError::Validation("日志级别不能为空".to_string()));
        }
        if VALID_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Ok(());
        }

        EnvFilter::try_new(level).map(|_| ()).map_err(|e| {
            ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?} 或 EnvFilter 指令 ({})",
                self.level, VALID_LEVELS, e
            ))
        })
    }

    /// 构造过滤器，`RUST_LOG` 优先
    pub(crate) fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        self.validate()?;
        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.trim())))
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}
