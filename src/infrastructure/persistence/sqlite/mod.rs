//! SQLite 持久化

mod database;
mod tag_repo;

pub use database::{create_pool, run_migrations, DatabaseConfig, DbPool};
pub use tag_repo::SqliteTagRepository;
