// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use html_escape::{decode_html_entities, encode_double_quoted_attribute, encode_text};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::models::result_record::ResultRecord;

/// Subject used when none is configured.
pub const DEFAULT_SUBJECT: &str = "Your Search Results";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Invalid email address: {0}")]
    AddressError(String),
    #[error("Failed to build email message: {0}")]
    BuildError(String),
    #[error("Failed to send email: {0}")]
    TransportError(String),
}

/// 待发送的邮件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// 邮件发送接口
///
/// 发件人身份与传输凭据属于实现方的配置，不经过请求体传递。
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DigestError>;
}

/// 摘要邮件服务
///
/// 将结果列表渲染为一个 HTML 文档并作为单封邮件发送给指定收件人。
pub struct DigestService {
    mailer: Arc<dyn Mailer>,
    subject: String,
}

impl DigestService {
    pub fn new(mailer: Arc<dyn Mailer>, subject: impl Into<String>) -> Self {
        Self {
            mailer,
            subject: subject.into(),
        }
    }

    pub async fn send_digest(
        &self,
        recipient: &str,
        results: &[ResultRecord],
    ) -> Result<(), DigestError> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(DigestError::ValidationError(
                "Recipient email cannot be empty".to_string(),
            ));
        }

        let email = OutgoingEmail {
            to: recipient.to_string(),
            subject: self.subject.clone(),
            html_body: render_digest(results),
        };

        if let Err(e) = self.mailer.send(&email).await {
            warn!(to = %recipient, error = %e, "Digest delivery failed");
            return Err(e);
        }

        info!(to = %recipient, results = results.len(), "Digest sent");
        Ok(())
    }
}

/// Render the whole digest document: every entry in input order inside one `<div>`.
pub fn render_digest(results: &[ResultRecord]) -> String {
    let entries: String = results.iter().map(render_entry).collect();
    format!("<div>{}</div>", entries)
}

/// Render one result as an HTML fragment.
pub fn render_entry(result: &ResultRecord) -> String {
    format!(
        concat!(
            "<h3>{title}</h3>",
            "<p>{summary}</p>",
            "<a href=\"{link}\" target=\"_blank\">View Original Post</a>",
            "<p><strong>Upvotes:</strong> {upvotes}, ",
            "<strong>Comments:</strong> {comments}, ",
            "<strong>Date:</strong> {date}</p>",
            "<hr/>"
        ),
        title = escape_upstream_text(&result.title),
        summary = escape_upstream_text(&result.summary),
        link = encode_double_quoted_attribute(&result.link),
        upvotes = result.upvotes,
        comments = result.comment_count,
        date = format_date(result.creation_date),
    )
}

/// Upstream APIs send text already entity-encoded; decode first so it is
/// escaped exactly once.
fn escape_upstream_text(text: &str) -> String {
    encode_text(&decode_html_entities(text)).into_owned()
}

/// Format epoch milliseconds as a `M/D/YYYY` calendar date in UTC.
pub fn format_date(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}
