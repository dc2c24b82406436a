//! Tag Commands

use serde_json::{Map, Value};

/// 创建标签：生成随机 key，写入在场标签并持久化记录
///
/// 调用方不得自带 tag_id，标识由服务端分配
#[derive(Debug, Clone)]
pub struct CreateTag {
    /// 调用方提交的任意字段（透传持久化）
    pub fields: Map<String, Value>,
}
