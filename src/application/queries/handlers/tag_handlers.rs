//! Tag Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{RfidDevicePort, TagRecord, TagRepositoryPort};
use crate::application::queries::GetScannedTag;

/// GetScannedTag Handler
pub struct GetScannedTagHandler {
    tag_repo: Arc<dyn TagRepositoryPort>,
    rfid: Arc<dyn RfidDevicePort>,
}

impl GetScannedTagHandler {
    pub fn new(tag_repo: Arc<dyn TagRepositoryPort>, rfid: Arc<dyn RfidDevicePort>) -> Self {
        Self { tag_repo, rfid }
    }

    pub async fn handle(&self, _query: GetScannedTag) -> Result<TagRecord, ApplicationError> {
        let scan = self.rfid.read_tag().await?;

        tracing::debug!(uid = %scan.uid, text = %scan.text, "Tag scanned");

        let record = self
            .tag_repo
            .find_by_tag_id(scan.text.trim())
            .await?
            .ok_or(ApplicationError::NotFound)?;

        tracing::info!(tag_id = %record.tag_id, "Tag matched");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::{json, Map};
    use uuid::Uuid;

    use crate::application::ports::TagScan;
    use crate::infrastructure::hardware::rfid::MockRfidDevice;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteTagRepository,
    };

    async fn in_memory_repo() -> Arc<SqliteTagRepository> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Arc::new(SqliteTagRepository::new(pool))
    }

    fn record(tag_id: &str) -> TagRecord {
        let mut fields = Map::new();
        fields.insert("owner".to_string(), json!("alice"));
        TagRecord {
            id: Uuid::new_v4(),
            tag_id: tag_id.to_string(),
            fields,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_padded_scan_matches_stored_record() {
        let repo = in_memory_repo().await;
        repo.insert(&record("XJ29KQ7T")).await.unwrap();

        let rfid = Arc::new(MockRfidDevice::new());
        // 读出的数据块可能仍带补位空格，查找前归一化
        rfid.queue_scan(TagScan {
            uid: "8804B2C3".to_string(),
            text: "XJ29KQ7T        ".to_string(),
        });

        let handler = GetScannedTagHandler::new(repo, rfid);
        let found = handler.handle(GetScannedTag).await.unwrap();

        assert_eq!(found.tag_id, "XJ29KQ7T");
        assert_eq!(found.fields.get("owner"), Some(&json!("alice")));
    }

    #[tokio::test]
    async fn test_unknown_scan_yields_not_found() {
        let repo = in_memory_repo().await;
        let rfid = Arc::new(MockRfidDevice::new());
        rfid.queue_scan(TagScan {
            uid: "8804B2C3".to_string(),
            text: "ZZZZZZZZ".to_string(),
        });

        let handler = GetScannedTagHandler::new(repo, rfid);
        let err = handler.handle(GetScannedTag).await.unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound));
    }

    #[tokio::test]
    async fn test_read_timeout_surfaces_hardware_error() {
        let repo = in_memory_repo().await;
        // 队列为空：模拟超时内没有标签在场
        let rfid = Arc::new(MockRfidDevice::new());

        let handler = GetScannedTagHandler::new(repo, rfid);
        let err = handler.handle(GetScannedTag).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Hardware(_)));
    }
}
