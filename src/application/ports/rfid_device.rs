//! RFID Device Port - 读写器硬件抽象
//!
//! 定义读写物理标签的抽象接口，具体实现在 infrastructure/hardware 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::tag::BlockPayload;

/// 硬件错误
#[derive(Debug, Error)]
pub enum HardwareError {
    #[error("RFID device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("No tag presented before deadline")]
    Timeout,

    #[error("Tag read failed: {0}")]
    ReadFailed(String),

    #[error("Tag write failed: {0}")]
    WriteFailed(String),
}

/// 一次读卡结果
///
/// `uid` 为标签硬件序列号，`text` 为数据块内容去除补位后的文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagScan {
    pub uid: String,
    pub text: String,
}

/// RFID Device Port
///
/// 读写器为单一物理资源。实现方必须串行化并发访问，
/// 并以配置的超时上界约束阻塞等待。
#[async_trait]
pub trait RfidDevicePort: Send + Sync {
    /// 等待标签在场并读取数据块
    async fn read_tag(&self) -> Result<TagScan, HardwareError>;

    /// 等待标签在场并写入 16 字节数据块
    async fn write_tag(&self, payload: BlockPayload) -> Result<(), HardwareError>;
}
