//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TAGBOX_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TAGBOX_SERVER__HOST=127.0.0.1`
/// - `TAGBOX_SERVER__PORT=8080`
/// - `TAGBOX_DATABASE__PATH=/data/tagbox.db`
/// - `TAGBOX_HARDWARE__RESET_PIN=25`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("database.path", "data/tagbox.db")?
        .set_default("database.max_connections", 5)?
        .set_default("hardware.reset_pin", 25)?
        .set_default("hardware.spi_clock_hz", 1_000_000)?
        .set_default("hardware.poll_interval_ms", 50)?
        .set_default("hardware.read_timeout_secs", 10)?
        .set_default("hardware.write_timeout_secs", 10)?
        .set_default("servo.channel", 0)?
        .set_default("servo.pulse_value", 10)?
        .set_default("servo.hold_ms", 500)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: TAGBOX_
    // 层级分隔符: __ (双下划线)
    // 例如: TAGBOX_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix("TAGBOX")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证数据库路径
    if config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    // 验证硬件超时，0 会让请求在无标签时立即失败
    if config.hardware.read_timeout_secs == 0 || config.hardware.write_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Hardware timeouts cannot be 0".to_string(),
        ));
    }

    // 验证 PWM 通道
    if config.servo.channel > 1 {
        return Err(ConfigError::ValidationError(
            "Servo PWM channel must be 0 or 1".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Database: {}", config.database.path);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("RFID Reset Pin: {}", config.hardware.reset_pin);
    tracing::info!("RFID SPI Clock: {} Hz", config.hardware.spi_clock_hz);
    tracing::info!(
        "RFID Timeouts: read {}s / write {}s",
        config.hardware.read_timeout_secs,
        config.hardware.write_timeout_secs
    );
    tracing::info!("Servo: channel {} value {}", config.servo.channel, config.servo.pulse_value);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
