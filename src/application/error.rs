//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{HardwareError, RepositoryError, ServoError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 调用方已携带 tag_id，标识由服务端分配
    #[error("Tag ID is already initialized")]
    AlreadyInitialized,

    /// 验证错误
    #[error("Validation error: {0}")]
    Validation(String),

    /// key 冲突（重试耗尽或并发插入）
    #[error("Duplicate tag: {0}")]
    DuplicateTag(String),

    /// 记录未找到
    #[error("Tag not found")]
    NotFound,

    /// 硬件错误
    #[error(transparent)]
    Hardware(#[from] HardwareError),

    /// 舵机错误
    #[error(transparent)]
    Servo(#[from] ServoError),

    /// 仓储错误
    #[error("Repository error: {0}")]
    Repository(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(msg) => Self::DuplicateTag(msg),
            other => Self::Repository(other.to_string()),
        }
    }
}
