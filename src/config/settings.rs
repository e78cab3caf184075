// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::services::digest_service::DEFAULT_SUBJECT;
use crate::infrastructure::search::reddit::REDDIT_BASE_URL;
use crate::infrastructure::search::stackoverflow::STACKEXCHANGE_API_BASE;

/// 应用程序配置设置
///
/// 包含服务器、上游搜索服务、邮件发送和日志等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 上游搜索服务配置
    pub upstream: UpstreamSettings,
    /// 邮件发送配置
    pub mail: MailSettings,
    /// 日志配置
    pub log: LogSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 上游搜索服务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    /// Stack Exchange API 根地址
    pub stackexchange_base_url: String,
    /// Reddit API 根地址
    pub reddit_base_url: String,
    /// 请求使用的 User-Agent（Reddit 会拒绝缺省 UA）
    pub user_agent: String,
    /// 单次上游请求超时时间（秒）
    pub timeout_secs: u64,
}

/// SMTP 邮件配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MailSettings {
    /// SMTP 服务器地址
    pub smtp_host: String,
    /// SMTP 端口（STARTTLS）
    pub smtp_port: u16,
    /// SMTP 用户名
    pub smtp_username: Option<String>,
    /// SMTP 密码或应用专用密码
    pub smtp_password: Option<String>,
    /// 发件人地址
    pub from_address: String,
    /// 邮件主题
    pub subject: String,
    /// 发送超时时间（秒）
    pub timeout_secs: u64,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// 以 JSON 格式输出日志
    pub json: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件与环境变量加载配置，支持默认值；
    /// `PORT` 环境变量会覆盖 `server.port`。
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::load(&env, std::env::var("PORT").ok())
    }

    /// Load settings for a named environment with an optional port override.
    pub fn load(env: &str, port_override: Option<String>) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Upstream APIs
            .set_default("upstream.stackexchange_base_url", STACKEXCHANGE_API_BASE)?
            .set_default("upstream.reddit_base_url", REDDIT_BASE_URL)?
            .set_default(
                "upstream.user_agent",
                concat!("threadsearch/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("upstream.timeout_secs", 30)?
            // Mail transport
            .set_default("mail.smtp_host", "smtp.gmail.com")?
            .set_default("mail.smtp_port", 587)?
            .set_default("mail.from_address", "no-reply@example.com")?
            .set_default("mail.subject", DEFAULT_SUBJECT)?
            .set_default("mail.timeout_secs", 30)?
            // Logging
            .set_default("log.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("THREADSEARCH").separator("__"))
            .set_override_option("server.port", port_override)?;

        builder.build()?.try_deserialize()
    }
}
