// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::settings::MailSettings;
use crate::domain::services::digest_service::{DigestError, Mailer, OutgoingEmail};

/// SMTP 邮件发送实现
///
/// 使用 STARTTLS 连接配置的中继服务器，发件人身份来自配置。
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &MailSettings) -> Result<Self, DigestError> {
        let from = parse_mailbox(&settings.from_address)?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)
            .map_err(|e| DigestError::TransportError(e.to_string()))?
            .port(settings.smtp_port)
            .timeout(Some(Duration::from_secs(settings.timeout_secs)));

        if let (Some(username), Some(password)) = (&settings.smtp_username, &settings.smtp_password)
        {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        info!(
            host = %settings.smtp_host,
            port = settings.smtp_port,
            from = %settings.from_address,
            "SMTP mailer configured"
        );

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DigestError> {
        let message = build_message(self.from.clone(), email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DigestError::TransportError(e.to_string()))?;

        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DigestError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| DigestError::AddressError(format!("{}: {}", address, e)))
}

/// Build the single-part HTML message for an outgoing digest.
pub fn build_message(from: Mailbox, email: &OutgoingEmail) -> Result<Message, DigestError> {
    let to = parse_mailbox(&email.to)?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(email.html_body.clone())
        .map_err(|e| DigestError::BuildError(e.to_string()))
}
