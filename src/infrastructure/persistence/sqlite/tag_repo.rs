//! SQLite Tag Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{RepositoryError, TagRecord, TagRepositoryPort};

/// SQLite Tag Repository
pub struct SqliteTagRepository {
    pool: DbPool,
}

impl SqliteTagRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TagRow {
    id: String,
    tag_id: String,
    fields: String,
    created_at: String,
}

impl TryFrom<TagRow> for TagRecord {
    type Error = RepositoryError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(TagRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            tag_id: row.tag_id,
            fields: serde_json::from_str(&row.fields)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl TagRepositoryPort for SqliteTagRepository {
    async fn insert(&self, record: &TagRecord) -> Result<(), RepositoryError> {
        let fields = serde_json::to_string(&record.fields)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO tags (id, tag_id, fields, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.tag_id)
        .bind(fields)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Duplicate(format!("Tag {} already exists", record.tag_id))
            }
            _ => RepositoryError::DatabaseError(e.to_string()),
        })?;

        Ok(())
    }

    async fn find_by_tag_id(&self, tag_id: &str) -> Result<Option<TagRecord>, RepositoryError> {
        let row: Option<TagRow> = sqlx::query_as(
            "SELECT id, tag_id, fields, created_at FROM tags WHERE tag_id = ?",
        )
        .bind(tag_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(TagRecord::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    use super::super::database::{create_pool, run_migrations, DatabaseConfig};

    async fn test_pool() -> DbPool {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn record(tag_id: &str) -> TagRecord {
        let mut fields = Map::new();
        fields.insert("owner".to_string(), json!("alice"));
        fields.insert("slot".to_string(), json!(3));
        TagRecord {
            id: Uuid::new_v4(),
            tag_id: tag_id.to_string(),
            fields,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_roundtrip() {
        let repo = SqliteTagRepository::new(test_pool().await);
        let saved = record("XJ29KQ7T");

        repo.insert(&saved).await.unwrap();

        let found = repo.find_by_tag_id("XJ29KQ7T").await.unwrap().unwrap();
        assert_eq!(found.id, saved.id);
        assert_eq!(found.tag_id, "XJ29KQ7T");
        assert_eq!(found.fields.get("owner"), Some(&json!("alice")));
        assert_eq!(found.fields.get("slot"), Some(&json!(3)));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = SqliteTagRepository::new(test_pool().await);
        assert!(repo.find_by_tag_id("NOPE0000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_tag_id_rejected() {
        let repo = SqliteTagRepository::new(test_pool().await);
        repo.insert(&record("XJ29KQ7T")).await.unwrap();

        let err = repo.insert(&record("XJ29KQ7T")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }
}
