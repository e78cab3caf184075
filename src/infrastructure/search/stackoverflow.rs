// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::models::result_record::{
    seconds_to_millis, summarize, ResultRecord, TOP_ANSWER_ANSWERED, TOP_ANSWER_NOT_ANSWERED,
};
use crate::domain::search::engine::{SearchError, SearchSource};

pub const STACKEXCHANGE_API_BASE: &str = "https://api.stackexchange.com";

/// Stack Exchange `/search` response envelope
#[derive(Debug, Deserialize)]
pub struct StackExchangeResponse {
    pub items: Vec<StackExchangeItem>,
}

#[derive(Debug, Deserialize)]
pub struct StackExchangeItem {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub link: String,
    pub is_answered: bool,
    pub score: i64,
    pub answer_count: i64,
    /// Unix seconds
    pub creation_date: i64,
}

impl From<StackExchangeItem> for ResultRecord {
    fn from(item: StackExchangeItem) -> Self {
        let top_answer = if item.is_answered {
            TOP_ANSWER_ANSWERED
        } else {
            TOP_ANSWER_NOT_ANSWERED
        };

        ResultRecord {
            summary: summarize(item.body.as_deref()),
            title: item.title,
            link: item.link,
            top_answer: top_answer.to_string(),
            upvotes: item.score,
            comment_count: item.answer_count,
            creation_date: seconds_to_millis(item.creation_date),
        }
    }
}

/// Stack Overflow 问答搜索源
///
/// 调用 Stack Exchange API 的标题关键字搜索，按最近活动倒序。
pub struct StackOverflowSource {
    client: reqwest::Client,
    base_url: String,
}

impl StackOverflowSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/2.2/search", self.base_url)
    }
}

#[async_trait]
impl SearchSource for StackOverflowSource {
    async fn search(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("order", "desc"),
                ("sort", "activity"),
                ("intitle", query),
                ("site", "stackoverflow"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: StackExchangeResponse = response.json().await?;
        debug!("Stack Exchange returned {} items", payload.items.len());

        Ok(payload.items.into_iter().map(ResultRecord::from).collect())
    }

    fn name(&self) -> &'static str {
        "stackoverflow"
    }
}
