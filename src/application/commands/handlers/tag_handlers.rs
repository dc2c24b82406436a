//! Tag Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::CreateTag;
use crate::application::error::ApplicationError;
use crate::application::ports::{RfidDevicePort, TagRecord, TagRepositoryPort};
use crate::domain::tag::{BlockPayload, TagKey};

/// key 与存量记录冲突时的重新生成次数上限
const MAX_KEY_ATTEMPTS: u32 = 3;

/// CreateTag Handler
pub struct CreateTagHandler {
    tag_repo: Arc<dyn TagRepositoryPort>,
    rfid: Arc<dyn RfidDevicePort>,
}

impl CreateTagHandler {
    pub fn new(tag_repo: Arc<dyn TagRepositoryPort>, rfid: Arc<dyn RfidDevicePort>) -> Self {
        Self { tag_repo, rfid }
    }

    pub async fn handle(&self, command: CreateTag) -> Result<TagRecord, ApplicationError> {
        // 标识由服务端分配，调用方自带 tag_id 直接拒绝，不触发硬件写入
        if command.fields.contains_key("tag_id") {
            return Err(ApplicationError::AlreadyInitialized);
        }

        let key = self.generate_unused_key().await?;

        // 物理写入成功之后才持久化，写失败不会留下孤儿记录
        self.rfid.write_tag(BlockPayload::from(&key)).await?;

        let record = TagRecord {
            id: Uuid::new_v4(),
            tag_id: key.into_string(),
            fields: command.fields,
            created_at: Utc::now(),
        };
        self.tag_repo.insert(&record).await?;

        tracing::info!(tag_id = %record.tag_id, "Tag created");

        Ok(record)
    }

    /// 生成存量中未使用的 key
    ///
    /// 冲突时重新生成，上界 MAX_KEY_ATTEMPTS。与并发插入撞 key 的
    /// 窗口仍由仓储唯一索引兜底。
    async fn generate_unused_key(&self) -> Result<TagKey, ApplicationError> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let key = TagKey::random();
            if self.tag_repo.find_by_tag_id(key.as_str()).await?.is_none() {
                return Ok(key);
            }
            tracing::warn!(tag_id = %key, "Generated key collides with stored tag, regenerating");
        }

        Err(ApplicationError::DuplicateTag(format!(
            "Failed to generate an unused key in {} attempts",
            MAX_KEY_ATTEMPTS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    use crate::infrastructure::hardware::rfid::MockRfidDevice;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteTagRepository,
    };

    async fn in_memory_repo() -> Arc<SqliteTagRepository> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Arc::new(SqliteTagRepository::new(pool))
    }

    #[tokio::test]
    async fn test_create_generates_key_and_writes_block() {
        let repo = in_memory_repo().await;
        let rfid = Arc::new(MockRfidDevice::new());
        let handler = CreateTagHandler::new(repo.clone(), rfid.clone());

        let mut fields = Map::new();
        fields.insert("owner".to_string(), json!("alice"));

        let record = handler.handle(CreateTag { fields }).await.unwrap();

        assert_eq!(record.tag_id.len(), 8);
        assert_eq!(record.fields.get("owner"), Some(&json!("alice")));

        // 写入硬件的块与生成的 key 一致（模补位）
        let writes = rfid.written_blocks();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].to_trimmed_string(), record.tag_id);

        // 记录已持久化
        let stored = repo.find_by_tag_id(&record.tag_id).await.unwrap().unwrap();
        assert_eq!(stored.tag_id, record.tag_id);
    }

    #[tokio::test]
    async fn test_create_rejects_preset_tag_id_without_hardware_write() {
        let repo = in_memory_repo().await;
        let rfid = Arc::new(MockRfidDevice::new());
        let handler = CreateTagHandler::new(repo, rfid.clone());

        let mut fields = Map::new();
        fields.insert("tag_id".to_string(), json!("ABC"));

        let err = handler.handle(CreateTag { fields }).await.unwrap_err();
        assert!(matches!(err, ApplicationError::AlreadyInitialized));
        assert!(rfid.written_blocks().is_empty());
    }

    #[tokio::test]
    async fn test_create_surfaces_hardware_write_failure() {
        let repo = in_memory_repo().await;
        let rfid = Arc::new(MockRfidDevice::new());
        rfid.set_fail_writes(true);
        let handler = CreateTagHandler::new(repo, rfid);

        let err = handler.handle(CreateTag { fields: Map::new() }).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Hardware(_)));
    }
}
