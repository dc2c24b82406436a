//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(error = %msg, "Resource conflict");
                (StatusCode::CONFLICT, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::AlreadyInitialized => {
                ApiError::BadRequest("Tag ID is already initialized".to_string())
            }
            ApplicationError::Validation(msg) => ApiError::BadRequest(msg),
            ApplicationError::DuplicateTag(msg) => ApiError::Conflict(msg),
            ApplicationError::NotFound => ApiError::NotFound("Tag not found".to_string()),
            // 硬件/驱动失败属于服务端故障，读写两条路径统一 500
            ApplicationError::Hardware(err) => ApiError::Internal(err.to_string()),
            ApplicationError::Servo(err) => ApiError::Internal(err.to_string()),
            ApplicationError::Repository(msg) => ApiError::Internal(msg),
        }
    }
}
