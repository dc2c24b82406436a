//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（RfidDevice、ServoDriver、TagRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Handlers
    handlers::{CreateTagHandler, PulseServoHandler},
    CreateTag,
    PulseServo,
};

pub use error::ApplicationError;

pub use ports::{
    // Repositories
    RepositoryError,
    TagRecord,
    TagRepositoryPort,
    // RFID device
    HardwareError,
    RfidDevicePort,
    TagScan,
    // Servo driver
    ServoDriverPort,
    ServoError,
};

pub use queries::{handlers::GetScannedTagHandler, GetScannedTag};
