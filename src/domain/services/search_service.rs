// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::models::result_record::ResultRecord;
use crate::domain::models::sort::SortCriteria;
use crate::domain::search::engine::{SearchError, SearchSource};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchServiceError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Search source {source_name} failed: {error}")]
    SearchEngine {
        source_name: &'static str,
        error: SearchError,
    },
}

/// 搜索聚合服务
///
/// 并发查询问答源与讨论源，按"问答结果在前、讨论结果在后"的顺序拼接。
/// 任一上游失败都会使整个请求失败，不返回部分结果。
pub struct SearchService {
    qa_source: Arc<dyn SearchSource>,
    discussion_source: Arc<dyn SearchSource>,
}

impl SearchService {
    pub fn new(qa_source: Arc<dyn SearchSource>, discussion_source: Arc<dyn SearchSource>) -> Self {
        Self {
            qa_source,
            discussion_source,
        }
    }

    pub async fn search(
        &self,
        query: &str,
        sort: SortCriteria,
    ) -> Result<Vec<ResultRecord>, SearchServiceError> {
        if query.trim().is_empty() {
            return Err(SearchServiceError::ValidationError(
                "Query cannot be empty".to_string(),
            ));
        }

        let (qa_results, discussion_results) = futures::try_join!(
            Self::fetch(self.qa_source.as_ref(), query),
            Self::fetch(self.discussion_source.as_ref(), query),
        )?;

        let mut results = qa_results;
        results.extend(discussion_results);
        sort.apply(&mut results);

        info!(
            query = %query,
            sort = %sort,
            total = results.len(),
            "Aggregated search results"
        );
        Ok(results)
    }

    async fn fetch(
        source: &dyn SearchSource,
        query: &str,
    ) -> Result<Vec<ResultRecord>, SearchServiceError> {
        let source_name = source.name();
        match source.search(query).await {
            Ok(results) => {
                info!("Source {} returned {} results", source_name, results.len());
                Ok(results)
            }
            Err(error) => {
                warn!("Source {} failed: {}", source_name, error);
                Err(SearchServiceError::SearchEngine { source_name, error })
            }
        }
    }
}
