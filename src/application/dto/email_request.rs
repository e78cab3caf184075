// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::dto::search_request::not_blank;
use crate::domain::models::result_record::ResultRecord;

/// `POST /send-email` request body
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequestDto {
    #[validate(custom(function = "not_blank", message = "Recipient email cannot be empty"))]
    pub recipient_email: String,
    #[serde(default)]
    pub results: Vec<ResultRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MessageResponseDto {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponseDto {
    pub error: String,
}
