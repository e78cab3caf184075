// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::result_record::ResultRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Upstream returned status {0}")]
    StatusError(u16),
    #[error("Malformed payload: {0}")]
    DecodeError(String),
    #[error("Timeout")]
    Timeout,
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else if err.is_decode() {
            SearchError::DecodeError(err.to_string())
        } else if let Some(status) = err.status() {
            SearchError::StatusError(status.as_u16())
        } else {
            SearchError::NetworkError(err.to_string())
        }
    }
}

/// 上游搜索源
///
/// 每个实现负责一次查询请求，并把原生条目归一化为 [`ResultRecord`]。
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Search the upstream service for `query`
    async fn search(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError>;

    /// Get the name of the search source
    fn name(&self) -> &'static str;
}
