//! 基础设施层
//!
//! - http: HTTP 服务器与路由
//! - persistence: SQLite 持久化
//! - hardware: RFID 读写器与舵机适配器

pub mod hardware;
pub mod http;
pub mod persistence;
