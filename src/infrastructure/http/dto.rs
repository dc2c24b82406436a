//! Data Transfer Objects
//!
//! 标签记录对外直接以透传 JSON 返回（`TagRecord::to_json`），
//! 这里只定义固定结构的响应体。

use serde::Serialize;

/// 舵机触发响应
#[derive(Debug, Serialize)]
pub struct ServoResponse {
    pub message: &'static str,
}
