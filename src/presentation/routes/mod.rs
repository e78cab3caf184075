// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::services::digest_service::DigestService;
use crate::domain::services::search_service::SearchService;
use crate::presentation::handlers::{email_handler, search_handler};

/// 创建应用路由
///
/// # 返回值
///
/// 返回未注入服务的路由，调用方需通过 `Extension` 层提供
/// `Arc<SearchService>` 与 `Arc<DigestService>`
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/search", get(search_handler::search))
        .route("/send-email", post(email_handler::send_email))
}

/// 创建完整的应用
///
/// 注入服务，并添加请求追踪与跨域支持
pub fn app(search_service: Arc<SearchService>, digest_service: Arc<DigestService>) -> Router {
    routes()
        .layer(Extension(search_service))
        .layer(Extension(digest_service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
