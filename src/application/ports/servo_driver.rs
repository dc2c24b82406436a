//! Servo Driver Port - 舵机驱动抽象

use async_trait::async_trait;
use thiserror::Error;

/// 舵机错误
#[derive(Debug, Error)]
pub enum ServoError {
    #[error("Servo driver unavailable: {0}")]
    DriverUnavailable(String),

    #[error("Servo command failed: {0}")]
    CommandFailed(String),
}

/// Servo Driver Port
#[async_trait]
pub trait ServoDriverPort: Send + Sync {
    /// 发送一次脉冲指令，指令值语义由具体驱动定义
    async fn pulse(&self, value: u8) -> Result<(), ServoError>;
}
