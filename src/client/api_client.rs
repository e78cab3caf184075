// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::application::dto::email_request::{
    ErrorResponseDto, MessageResponseDto, SendEmailRequestDto,
};
use crate::domain::models::result_record::ResultRecord;
use crate::domain::models::sort::SortCriteria;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// threadsearch HTTP API 客户端
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ApiClientError> {
        // Url::join drops the last path segment unless it ends with '/'
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };
        Ok(Self { client, base_url })
    }

    /// `GET /search`
    pub async fn search(
        &self,
        query: &str,
        sort: Option<SortCriteria>,
    ) -> Result<Vec<ResultRecord>, ApiClientError> {
        let mut request = self
            .client
            .get(self.base_url.join("search")?)
            .query(&[("query", query)]);
        if let Some(sort) = sort {
            request = request.query(&[("sort", sort.name())]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// `POST /send-email`
    pub async fn send_email(
        &self,
        recipient_email: &str,
        results: &[ResultRecord],
    ) -> Result<String, ApiClientError> {
        let body = SendEmailRequestDto {
            recipient_email: recipient_email.to_string(),
            results: results.to_vec(),
        };

        let response = self
            .client
            .post(self.base_url.join("send-email")?)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let reply: MessageResponseDto = response.json().await?;
        Ok(reply.message)
    }

    async fn api_error(response: reqwest::Response) -> ApiClientError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponseDto>(&text)
            .map(|e| e.error)
            .unwrap_or(text);
        ApiClientError::Api { status, message }
    }
}
