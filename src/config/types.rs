//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// RFID 读写器配置
    #[serde(default)]
    pub hardware: HardwareConfig,

    /// 舵机配置
    #[serde(default)]
    pub servo: ServoConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库文件路径
    #[serde(default = "default_db_path")]
    pub path: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "data/tagbox.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// 获取数据库 URL
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

/// RFID 读写器配置
#[derive(Debug, Clone, Deserialize)]
pub struct HardwareConfig {
    /// 复位脚（BCM 编号）
    #[serde(default = "default_reset_pin")]
    pub reset_pin: u8,

    /// SPI 时钟频率（Hz）
    #[serde(default = "default_spi_clock_hz")]
    pub spi_clock_hz: u32,

    /// 等待标签在场的轮询间隔（毫秒）
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// 读操作超时（秒）
    #[serde(default = "default_rw_timeout")]
    pub read_timeout_secs: u64,

    /// 写操作超时（秒）
    #[serde(default = "default_rw_timeout")]
    pub write_timeout_secs: u64,
}

fn default_reset_pin() -> u8 {
    25
}

fn default_spi_clock_hz() -> u32 {
    1_000_000
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_rw_timeout() -> u64 {
    10
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            reset_pin: default_reset_pin(),
            spi_clock_hz: default_spi_clock_hz(),
            poll_interval_ms: default_poll_interval_ms(),
            read_timeout_secs: default_rw_timeout(),
            write_timeout_secs: default_rw_timeout(),
        }
    }
}

/// 舵机配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServoConfig {
    /// 硬件 PWM 通道（0 或 1）
    #[serde(default)]
    pub channel: u8,

    /// /servo/ 端点下发的固定指令值
    #[serde(default = "default_pulse_value")]
    pub pulse_value: u8,

    /// 脉冲保持时长（毫秒）
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

fn default_pulse_value() -> u8 {
    10
}

fn default_hold_ms() -> u64 {
    500
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            channel: 0,
            pulse_value: default_pulse_value(),
            hold_ms: default_hold_ms(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.path, "data/tagbox.db");
        assert_eq!(config.hardware.reset_pin, 25);
        assert_eq!(config.servo.pulse_value, 10);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_database_url() {
        let config = DatabaseConfig::default();
        assert_eq!(config.database_url(), "sqlite:data/tagbox.db?mode=rwc");
    }
}
