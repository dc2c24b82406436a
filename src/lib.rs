//! Tagbox - RFID 标签发放与查验服务
//!
//! 架构设计: Hexagonal (Ports & Adapters)
//!
//! 领域层 (domain/):
//! - Tag Context: 标签 key 与物理数据块模型
//!
//! 应用层 (application/):
//! - Ports: 端口定义（RfidDevice, ServoDriver, TagRepository）
//! - Commands: CQRS 命令处理器（CreateTag, PulseServo）
//! - Queries: CQRS 查询处理器（GetScannedTag）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Hardware: MFRC522 读写器 / PWM 舵机（hardware feature），Mock 适配器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
