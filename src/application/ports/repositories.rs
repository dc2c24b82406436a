//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 标签记录（用于持久化）
///
/// `fields` 为调用方在创建时提交的任意 JSON 对象，核心不解释其内容，
/// 原样透传存储与返回。
#[derive(Debug, Clone)]
pub struct TagRecord {
    pub id: Uuid,
    /// 与物理标签数据块一致的 8 位 key
    pub tag_id: String,
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl TagRecord {
    /// 序列化为对外返回的 JSON 对象（fields 平铺 + tag_id）
    pub fn to_json(&self) -> Value {
        let mut body = self.fields.clone();
        body.insert("tag_id".to_string(), Value::String(self.tag_id.clone()));
        Value::Object(body)
    }
}

/// Tag Repository Port
#[async_trait]
pub trait TagRepositoryPort: Send + Sync {
    /// 持久化新记录；tag_id 已存在时返回 `Duplicate`
    async fn insert(&self, record: &TagRecord) -> Result<(), RepositoryError>;

    /// 按 tag_id 精确查找
    async fn find_by_tag_id(&self, tag_id: &str) -> Result<Option<TagRecord>, RepositoryError>;
}
