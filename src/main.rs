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

use std::sync::Arc;

use threadsearch::config::settings::Settings;
use threadsearch::domain::services::digest_service::DigestService;
use threadsearch::infrastructure::mail::smtp_mailer::SmtpMailer;
use threadsearch::infrastructure::search::SearchSourceFactory;
use threadsearch::presentation::routes;
use threadsearch::utils::telemetry;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(settings.log.json);
    info!("Starting threadsearch...");
    info!("Configuration loaded");

    // 3. Initialize search sources
    let search_service = Arc::new(SearchSourceFactory::create_search_service(
        &settings.upstream,
    )?);

    // 4. Initialize mailer
    let mailer = Arc::new(SmtpMailer::new(&settings.mail)?);
    let digest_service = Arc::new(DigestService::new(mailer, settings.mail.subject.clone()));

    // 5. Start HTTP server
    let app = routes::app(search_service, digest_service);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
