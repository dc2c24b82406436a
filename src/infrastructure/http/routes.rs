//! HTTP Routes
//!
//! API Endpoints:
//! - /create_tag/   POST  创建标签（生成 key，写入在场标签并持久化）
//! - /get_tag/      GET   读取在场标签并返回匹配记录
//! - /servo/        GET   触发舵机脉冲
//! - /ping          GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create_tag/", post(handlers::create_tag))
        .route("/get_tag/", get(handlers::get_tag))
        .route("/servo/", get(handlers::actuate_servo))
        .route("/ping", get(handlers::ping))
}
