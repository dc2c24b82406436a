//! Tag HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{CreateTag, GetScannedTag};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建标签：生成随机 key，写入在场标签并持久化记录
pub async fn create_tag(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let fields = match body {
        Value::Object(map) => map,
        _ => {
            return Err(ApiError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ))
        }
    };

    let record = state.create_tag_handler.handle(CreateTag { fields }).await?;

    Ok((StatusCode::CREATED, Json(record.to_json())))
}

/// 读取在场标签并返回匹配的记录
pub async fn get_tag(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let record = state.get_scanned_tag_handler.handle(GetScannedTag).await?;

    Ok(Json(record.to_json()))
}
