// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::settings::UpstreamSettings;
use crate::domain::search::engine::SearchSource;
use crate::domain::services::search_service::SearchService;
use crate::infrastructure::search::reddit::RedditSource;
use crate::infrastructure::search::stackoverflow::StackOverflowSource;

/// 搜索源工厂
///
/// 根据上游配置构建共享的 HTTP 客户端与两个搜索源。
pub struct SearchSourceFactory;

impl SearchSourceFactory {
    /// Build the shared HTTP client used by both sources.
    pub fn create_client(settings: &UpstreamSettings) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
    }

    /// Build the Q&A source and the discussion source, in that order.
    pub fn create_sources(
        settings: &UpstreamSettings,
    ) -> Result<(Arc<dyn SearchSource>, Arc<dyn SearchSource>), reqwest::Error> {
        let client = Self::create_client(settings)?;

        let qa: Arc<dyn SearchSource> = Arc::new(StackOverflowSource::new(
            client.clone(),
            settings.stackexchange_base_url.as_str(),
        ));
        let discussion: Arc<dyn SearchSource> = Arc::new(RedditSource::new(
            client,
            settings.reddit_base_url.as_str(),
        ));

        info!(
            "Search sources ready: {} ({}), {} ({})",
            qa.name(),
            settings.stackexchange_base_url,
            discussion.name(),
            settings.reddit_base_url
        );
        Ok((qa, discussion))
    }

    pub fn create_search_service(
        settings: &UpstreamSettings,
    ) -> Result<SearchService, reqwest::Error> {
        let (qa, discussion) = Self::create_sources(settings)?;
        Ok(SearchService::new(qa, discussion))
    }
}
