// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::services::digest_service::DigestError;
use crate::domain::services::search_service::SearchServiceError;

pub const SEARCH_FAILED_MESSAGE: &str = "Error fetching data from APIs";
pub const EMAIL_FAILED_MESSAGE: &str = "Error sending email";

/// 应用错误类型
///
/// 上游与邮件失败对调用方不可区分，只返回固定的通用消息；
/// 具体原因只写入日志。
#[derive(Debug)]
pub enum AppError {
    /// 请求参数校验失败
    BadRequest(String),
    /// 任一上游搜索请求失败
    SearchFailed(String),
    /// 邮件发送失败
    EmailFailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(details) => (StatusCode::BAD_REQUEST, details),
            AppError::SearchFailed(cause) => {
                error!(cause = %cause, "Search request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SEARCH_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::EmailFailed(cause) => {
                error!(cause = %cause, "Email request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    EMAIL_FAILED_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<SearchServiceError> for AppError {
    fn from(err: SearchServiceError) -> Self {
        match err {
            SearchServiceError::ValidationError(details) => AppError::BadRequest(details),
            e @ SearchServiceError::SearchEngine { .. } => AppError::SearchFailed(e.to_string()),
        }
    }
}

impl From<DigestError> for AppError {
    fn from(err: DigestError) -> Self {
        match err {
            DigestError::ValidationError(details) => AppError::BadRequest(details),
            other => AppError::EmailFailed(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
