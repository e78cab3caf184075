// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::models::result_record::{
    seconds_to_millis, summarize, ResultRecord, TOP_ANSWER_SEE_COMMENTS,
};
use crate::domain::search::engine::{SearchError, SearchSource};

/// Public site root; permalinks are relative to it.
pub const REDDIT_BASE_URL: &str = "https://www.reddit.com";

/// Reddit listing: `{ "data": { "children": [ { "data": { .. } } ] } }`
#[derive(Debug, Deserialize)]
pub struct RedditListing {
    pub data: RedditListingData,
}

#[derive(Debug, Deserialize)]
pub struct RedditListingData {
    pub children: Vec<RedditChild>,
}

#[derive(Debug, Deserialize)]
pub struct RedditChild {
    pub data: RedditPost,
}

#[derive(Debug, Deserialize)]
pub struct RedditPost {
    pub title: String,
    #[serde(default)]
    pub selftext: Option<String>,
    pub permalink: String,
    pub ups: i64,
    pub num_comments: i64,
    /// Unix seconds; Reddit sends it as a float
    pub created_utc: f64,
}

impl From<RedditPost> for ResultRecord {
    fn from(post: RedditPost) -> Self {
        ResultRecord {
            summary: summarize(post.selftext.as_deref()),
            link: format!("{}{}", REDDIT_BASE_URL, post.permalink),
            title: post.title,
            top_answer: TOP_ANSWER_SEE_COMMENTS.to_string(),
            upvotes: post.ups,
            comment_count: post.num_comments,
            creation_date: seconds_to_millis(post.created_utc.trunc() as i64),
        }
    }
}

/// Reddit 讨论搜索源
///
/// `base_url` 只决定 API 请求地址；结果链接始终基于 [`REDDIT_BASE_URL`]。
pub struct RedditSource {
    client: reqwest::Client,
    base_url: String,
}

impl RedditSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search.json", self.base_url)
    }
}

#[async_trait]
impl SearchSource for RedditSource {
    async fn search(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?;

        let listing: RedditListing = response.json().await?;
        debug!("Reddit returned {} posts", listing.data.children.len());

        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| ResultRecord::from(child.data))
            .collect())
    }

    fn name(&self) -> &'static str {
        "reddit"
    }
}
