//! CQRS Queries

pub mod handlers;
mod tag_queries;

pub use tag_queries::GetScannedTag;
