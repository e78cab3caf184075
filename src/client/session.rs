// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use tracing::{info, warn};

use crate::client::api_client::{ApiClient, ApiClientError};
use crate::domain::models::result_record::ResultRecord;
use crate::domain::models::sort::SortCriteria;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please enter a search term")]
    EmptyQuery,
    #[error("Please enter a valid email address")]
    EmptyRecipient,
    #[error(transparent)]
    Api(#[from] ApiClientError),
}

/// 搜索会话状态
///
/// 所有字段只能通过 [`SearchSession`] 的操作方法修改。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub query: String,
    /// Results in fetch order; sorting is applied on read.
    pub results: Vec<ResultRecord>,
    pub sort: SortCriteria,
    pub email: String,
    pub email_sent: bool,
    pub email_error: bool,
}

/// 搜索会话视图模型
///
/// 每个用户操作对应一个方法。空查询与空收件人在本地拦截，不发出网络请求。
pub struct SearchSession {
    api: ApiClient,
    state: SessionState,
}

impl SearchSession {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    pub fn set_sort(&mut self, sort: SortCriteria) {
        self.state.sort = sort;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.email = email.into();
        self.state.email_error = false;
    }

    /// Results in the currently selected order.
    pub fn sorted_results(&self) -> Vec<ResultRecord> {
        self.state.sort.sorted(&self.state.results)
    }

    /// Run the current query. On failure the previous results are kept.
    pub async fn search(&mut self) -> Result<usize, SessionError> {
        let query = self.state.query.trim().to_string();
        if query.is_empty() {
            return Err(SessionError::EmptyQuery);
        }

        match self.api.search(&query, None).await {
            Ok(results) => {
                info!(query = %query, count = results.len(), "Search completed");
                self.state.results = results;
                self.state.email_sent = false;
                Ok(self.state.results.len())
            }
            Err(e) => {
                warn!(query = %query, error = %e, "Search failed");
                Err(e.into())
            }
        }
    }

    /// Email the results, in the displayed order, to the entered address.
    pub async fn send_email(&mut self) -> Result<(), SessionError> {
        let recipient = self.state.email.trim().to_string();
        if recipient.is_empty() {
            self.state.email_error = true;
            return Err(SessionError::EmptyRecipient);
        }

        let results = self.sorted_results();
        match self.api.send_email(&recipient, &results).await {
            Ok(_) => {
                self.state.email_sent = true;
                Ok(())
            }
            Err(e) => {
                warn!(to = %recipient, error = %e, "Sending digest failed");
                Err(e.into())
            }
        }
    }
}
