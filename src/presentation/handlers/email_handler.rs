// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::email_request::{MessageResponseDto, SendEmailRequestDto},
    domain::services::digest_service::DigestService,
    presentation::errors::AppError,
};

pub const EMAIL_SENT_MESSAGE: &str = "Email sent successfully!";

/// 处理摘要邮件发送请求
///
/// 把请求中的结果列表渲染为 HTML 摘要，发送给 `recipientEmail`。
pub async fn send_email(
    Extension(service): Extension<Arc<DigestService>>,
    Json(payload): Json<SendEmailRequestDto>,
) -> Result<Json<MessageResponseDto>, AppError> {
    payload.validate()?;

    service
        .send_digest(&payload.recipient_email, &payload.results)
        .await?;

    Ok(Json(MessageResponseDto {
        message: EMAIL_SENT_MESSAGE.to_string(),
    }))
}
