// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::utils::text_processing::truncate_chars;

/// Maximum number of characters kept from an item's body text.
pub const SUMMARY_MAX_CHARS: usize = 150;

/// Summary used when the upstream item carries no body text.
pub const SUMMARY_PLACEHOLDER: &str = "No summary available";

/// Status text for answered Q&A items.
pub const TOP_ANSWER_ANSWERED: &str = "Answered";

/// Status text for unanswered Q&A items.
pub const TOP_ANSWER_NOT_ANSWERED: &str = "Not Answered";

/// Status text for discussion items, whose answers live in the comment thread.
pub const TOP_ANSWER_SEE_COMMENTS: &str = "See comments on Reddit";

/// 统一的搜索结果记录
///
/// 由上游服务的原生条目归一化而来，创建后不再修改。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub top_answer: String,
    pub upvotes: i64,
    pub comment_count: i64,
    /// Milliseconds since the Unix epoch.
    pub creation_date: i64,
}

/// Build the summary for a body text: its first [`SUMMARY_MAX_CHARS`]
/// characters, or the placeholder when the body is absent or empty.
pub fn summarize(body: Option<&str>) -> String {
    match body {
        Some(text) if !text.is_empty() => truncate_chars(text, SUMMARY_MAX_CHARS).to_string(),
        _ => SUMMARY_PLACEHOLDER.to_string(),
    }
}

/// Convert an upstream Unix timestamp in seconds into epoch milliseconds.
pub fn seconds_to_millis(seconds: i64) -> i64 {
    seconds.saturating_mul(1000)
}
